//! Registry error types for seeding and lookup failures.

use thiserror::Error;

/// Errors that can occur while seeding or querying the currency registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    // ========== Lookup Errors ==========
    /// Currency code does not resolve to a registered currency.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    // ========== Seeding Errors ==========
    /// The same code appears twice in the seed data.
    #[error("Duplicate currency in seed data: {0}")]
    DuplicateCurrency(String),

    /// The minor-unit divisor is not a positive power of 10.
    #[error("Minor-unit divisor for {code} must be a positive power of 10, got {divisor}")]
    InvalidMinorUnitDivisor {
        /// The offending currency code.
        code: String,
        /// The rejected divisor value.
        divisor: i64,
    },

    /// The smallest denomination is below one minor unit.
    #[error("Smallest denomination for {code} must be at least 1, got {denomination}")]
    InvalidSmallestDenomination {
        /// The offending currency code.
        code: String,
        /// The rejected denomination value.
        denomination: i64,
    },
}

impl RegistryError {
    /// Returns the error code for structured reporting.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedCurrency(_) => "UNSUPPORTED_CURRENCY",
            Self::DuplicateCurrency(_) => "DUPLICATE_CURRENCY",
            Self::InvalidMinorUnitDivisor { .. } => "INVALID_MINOR_UNIT_DIVISOR",
            Self::InvalidSmallestDenomination { .. } => "INVALID_SMALLEST_DENOMINATION",
        }
    }
}
