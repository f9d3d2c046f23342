//! Currency-checked comparisons.
//!
//! Every comparison asserts currency compatibility before looking at the
//! amounts; a mismatch fails with `CurrencyMismatch` and performs no
//! computation. Amounts compare as plain integers, so equal-currency values
//! with equal amounts are equal regardless of rounding policy or label.

use std::cmp::Ordering;

use super::error::MoneyError;
use super::value::Money;

impl Money {
    /// Fails with `CurrencyMismatch` unless both values share a currency.
    pub(super) fn assert_same_currency(&self, other: &Self) -> Result<(), MoneyError> {
        if self.is_same_currency(other) {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency().code.clone(),
                actual: other.currency().code.clone(),
            })
        }
    }

    /// Total ordering on the minor-unit amounts.
    fn compare(&self, other: &Self) -> Ordering {
        self.minor_units().cmp(&other.minor_units())
    }

    /// Returns true if both values hold the same amount.
    pub fn equals(&self, other: &Self) -> Result<bool, MoneyError> {
        self.assert_same_currency(other)?;
        Ok(self.compare(other) == Ordering::Equal)
    }

    /// Returns true if this value is strictly greater than the other.
    pub fn greater_than(&self, other: &Self) -> Result<bool, MoneyError> {
        self.assert_same_currency(other)?;
        Ok(self.compare(other) == Ordering::Greater)
    }

    /// Returns true if this value is greater than or equal to the other.
    pub fn greater_than_or_equal(&self, other: &Self) -> Result<bool, MoneyError> {
        self.assert_same_currency(other)?;
        Ok(self.compare(other) != Ordering::Less)
    }

    /// Returns true if this value is strictly less than the other.
    pub fn less_than(&self, other: &Self) -> Result<bool, MoneyError> {
        self.assert_same_currency(other)?;
        Ok(self.compare(other) == Ordering::Less)
    }

    /// Returns true if this value is less than or equal to the other.
    pub fn less_than_or_equal(&self, other: &Self) -> Result<bool, MoneyError> {
        self.assert_same_currency(other)?;
        Ok(self.compare(other) != Ordering::Greater)
    }
}

#[cfg(test)]
mod tests {
    use tender_registry::CurrencyRegistry;

    use crate::money::value::MoneyOptions;
    use crate::rounding::RoundingPolicy;

    use super::*;

    fn usd(amount: i64) -> Money {
        Money::from_minor_units(amount, "USD", CurrencyRegistry::builtin(), MoneyOptions::default())
            .unwrap()
    }

    fn eur(amount: i64) -> Money {
        Money::from_minor_units(amount, "EUR", CurrencyRegistry::builtin(), MoneyOptions::default())
            .unwrap()
    }

    #[test]
    fn test_equals() {
        assert!(usd(100).equals(&usd(100)).unwrap());
        assert!(!usd(100).equals(&usd(101)).unwrap());
    }

    #[test]
    fn test_equality_ignores_policy_and_label() {
        let plain = usd(100);
        let tagged = Money::from_minor_units(
            100,
            "USD",
            CurrencyRegistry::builtin(),
            MoneyOptions {
                rounding_policy: Some(RoundingPolicy::Up),
                smallest_denomination: Some(25),
                label: Some("deposit".to_string()),
            },
        )
        .unwrap();
        assert!(plain.equals(&tagged).unwrap());
    }

    #[test]
    fn test_ordering() {
        assert!(usd(200).greater_than(&usd(100)).unwrap());
        assert!(!usd(100).greater_than(&usd(100)).unwrap());
        assert!(usd(100).greater_than_or_equal(&usd(100)).unwrap());
        assert!(usd(100).less_than(&usd(200)).unwrap());
        assert!(!usd(100).less_than(&usd(100)).unwrap());
        assert!(usd(100).less_than_or_equal(&usd(100)).unwrap());

        // Negative amounts order below zero and positives.
        assert!(usd(-50).less_than(&usd(0)).unwrap());
        assert!(usd(0).greater_than(&usd(-50)).unwrap());
    }

    #[test]
    fn test_every_comparison_rejects_mismatched_currencies() {
        let base = usd(100);
        let other = eur(100);

        let results = [
            base.equals(&other),
            base.greater_than(&other),
            base.greater_than_or_equal(&other),
            base.less_than(&other),
            base.less_than_or_equal(&other),
        ];
        for result in results {
            let err = result.unwrap_err();
            assert_eq!(err.error_code(), "CURRENCY_MISMATCH");
            assert_eq!(err.to_string(), "Currency mismatch: expected USD, got EUR");
        }
    }
}
