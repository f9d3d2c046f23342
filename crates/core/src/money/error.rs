//! Error types for monetary operations.

use thiserror::Error;

use tender_registry::RegistryError;

/// Errors that can occur when constructing or combining monetary values.
///
/// Every error is surfaced as an explicit failure result from the operation
/// that detects it; none are recovered internally, and because values are
/// immutable no operation can leave a value partially updated.
#[derive(Debug, Error)]
pub enum MoneyError {
    /// Currency code did not resolve in the registry.
    #[error(transparent)]
    UnsupportedCurrency(#[from] RegistryError),

    /// Binary operation between values of different currencies.
    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch {
        /// Currency code of the base value.
        expected: String,
        /// Currency code of the offending operand.
        actual: String,
    },

    /// Division by exactly zero.
    #[error("Division by zero")]
    DivideByZero,

    /// A smallest-denomination override below one minor unit.
    #[error("Smallest denomination must be at least 1, got {0}")]
    InvalidDenomination(i64),

    /// Result does not fit the minor-unit integer range.
    #[error("Amount exceeds the representable minor-unit range")]
    AmountOverflow,
}

impl MoneyError {
    /// Returns the error code for structured reporting.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedCurrency(_) => "UNSUPPORTED_CURRENCY",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::DivideByZero => "DIVIDE_BY_ZERO",
            Self::InvalidDenomination(_) => "INVALID_DENOMINATION",
            Self::AmountOverflow => "AMOUNT_OVERFLOW",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            MoneyError::UnsupportedCurrency(RegistryError::UnsupportedCurrency(
                "XXX".to_string()
            ))
            .error_code(),
            "UNSUPPORTED_CURRENCY"
        );
        assert_eq!(
            MoneyError::CurrencyMismatch {
                expected: "USD".to_string(),
                actual: "EUR".to_string(),
            }
            .error_code(),
            "CURRENCY_MISMATCH"
        );
        assert_eq!(MoneyError::DivideByZero.error_code(), "DIVIDE_BY_ZERO");
        assert_eq!(
            MoneyError::InvalidDenomination(0).error_code(),
            "INVALID_DENOMINATION"
        );
        assert_eq!(MoneyError::AmountOverflow.error_code(), "AMOUNT_OVERFLOW");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoneyError::CurrencyMismatch {
                expected: "USD".to_string(),
                actual: "EUR".to_string(),
            }
            .to_string(),
            "Currency mismatch: expected USD, got EUR"
        );
        assert_eq!(MoneyError::DivideByZero.to_string(), "Division by zero");
        assert_eq!(
            MoneyError::InvalidDenomination(-5).to_string(),
            "Smallest denomination must be at least 1, got -5"
        );
        // The registry error passes through unchanged.
        assert_eq!(
            MoneyError::UnsupportedCurrency(RegistryError::UnsupportedCurrency(
                "XYZ".to_string()
            ))
            .to_string(),
            "Unsupported currency: XYZ"
        );
    }
}
