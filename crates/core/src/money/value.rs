//! The immutable monetary value type.
//!
//! A `Money` is an exact integer amount of minor units bound to a registered
//! currency, plus the per-value rounding policy and denomination overrides
//! that govern how fractional results of later operations are resolved.
//! Values are immutable: every operation produces a new `Money`.

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use tender_registry::{Currency, CurrencyRegistry};

use crate::rounding::{RoundingPolicy, round_to_denomination};

use super::error::MoneyError;

/// Options accepted by the `Money` constructors.
#[derive(Debug, Clone, Default)]
pub struct MoneyOptions {
    /// Explicit rounding policy. `None` means the value carries no override
    /// and falls back to banker's rounding.
    pub rounding_policy: Option<RoundingPolicy>,
    /// Explicit smallest-denomination override, in minor units. `None` means
    /// the currency's registered smallest denomination applies.
    pub smallest_denomination: Option<i64>,
    /// Free-form annotation carried through serialization.
    pub label: Option<String>,
}

/// An exact integer amount of a single currency, in minor units.
///
/// No `Money` ever stores a fractional minor unit: `from_major_units` rounds
/// at construction time, and multiply/divide round their `Decimal`
/// intermediates through the value's effective policy and denomination.
#[derive(Debug, Clone)]
pub struct Money {
    minor_units: i64,
    currency: Arc<Currency>,
    policy: Option<RoundingPolicy>,
    denomination: Option<i64>,
    label: Option<String>,
}

impl Money {
    /// Creates a value from an exact integer minor-unit amount.
    ///
    /// The amount is stored verbatim; an integer is already exact, so no
    /// rounding is performed.
    pub fn from_minor_units(
        amount: i64,
        code: &str,
        registry: &CurrencyRegistry,
        options: MoneyOptions,
    ) -> Result<Self, MoneyError> {
        let currency = registry.resolve(code)?;
        let (policy, denomination, label) = unpack_options(options)?;
        Ok(Self {
            minor_units: amount,
            currency,
            policy,
            denomination,
            label,
        })
    }

    /// Creates a value from a decimal major-unit amount.
    ///
    /// The amount is scaled by the currency's minor-unit divisor and rounded
    /// with the value's effective policy and denomination before storing, so
    /// the stored amount is always an integer multiple of one minor unit.
    pub fn from_major_units(
        amount: Decimal,
        code: &str,
        registry: &CurrencyRegistry,
        options: MoneyOptions,
    ) -> Result<Self, MoneyError> {
        let currency = registry.resolve(code)?;
        let (policy, denomination, label) = unpack_options(options)?;
        let scaled = amount
            .checked_mul(Decimal::from(currency.minor_unit_divisor))
            .ok_or(MoneyError::AmountOverflow)?;
        let effective_policy = policy.unwrap_or_default();
        let effective_denomination = denomination.unwrap_or(currency.smallest_denomination);
        let minor_units = round_to_denomination(scaled, effective_policy, effective_denomination)
            .to_i64()
            .ok_or(MoneyError::AmountOverflow)?;
        Ok(Self {
            minor_units,
            currency,
            policy,
            denomination,
            label,
        })
    }

    /// Creates a zero amount in the given currency.
    pub fn zero(code: &str, registry: &CurrencyRegistry) -> Result<Self, MoneyError> {
        Self::from_minor_units(0, code, registry, MoneyOptions::default())
    }

    /// The exact integer amount in minor units. Authoritative.
    #[must_use]
    pub fn minor_units(&self) -> i64 {
        self.minor_units
    }

    /// The derived major-unit amount. Computed on demand, never stored.
    #[must_use]
    pub fn major_units(&self) -> Decimal {
        Decimal::new(self.minor_units, self.currency.exponent())
    }

    /// The currency this value is bound to.
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// The explicit rounding policy override, if any.
    #[must_use]
    pub fn rounding_policy(&self) -> Option<RoundingPolicy> {
        self.policy
    }

    /// The explicit smallest-denomination override, if any.
    #[must_use]
    pub fn denomination(&self) -> Option<i64> {
        self.denomination
    }

    /// The caller-supplied annotation, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The rounding policy in effect for this value.
    #[must_use]
    pub fn effective_policy(&self) -> RoundingPolicy {
        self.policy.unwrap_or_default()
    }

    /// The denomination granularity in effect for this value, in minor units.
    #[must_use]
    pub fn effective_denomination(&self) -> i64 {
        self.denomination
            .unwrap_or(self.currency.smallest_denomination)
    }

    /// Returns true if both values are bound to the same currency.
    #[must_use]
    pub fn is_same_currency(&self, other: &Self) -> bool {
        self.currency.code == other.currency.code
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.minor_units == 0
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.minor_units > 0
    }

    /// Returns true if the amount is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.minor_units < 0
    }

    /// A new value holding the absolute amount, preserving currency, policy,
    /// denomination, and label.
    pub fn absolute(&self) -> Result<Self, MoneyError> {
        let amount = self
            .minor_units
            .checked_abs()
            .ok_or(MoneyError::AmountOverflow)?;
        Ok(self.with_minor_units(amount))
    }

    /// A new value holding the negated amount, preserving currency, policy,
    /// denomination, and label.
    pub fn negate(&self) -> Result<Self, MoneyError> {
        let amount = self
            .minor_units
            .checked_neg()
            .ok_or(MoneyError::AmountOverflow)?;
        Ok(self.with_minor_units(amount))
    }

    /// The serialized representation of this value.
    #[must_use]
    pub fn to_record(&self) -> MoneyRecord {
        MoneyRecord {
            minor_units: self.minor_units,
            currency: self.currency.code.clone(),
            major_units: self.major_units(),
            label: self.label.clone(),
        }
    }

    /// Reconstructs a value from its serialized representation.
    ///
    /// Only the minor-unit amount, currency code, and label are read; the
    /// major-unit field is informational output and never round-tripped.
    pub fn from_record(
        record: &MoneyRecord,
        registry: &CurrencyRegistry,
    ) -> Result<Self, MoneyError> {
        Self::from_minor_units(
            record.minor_units,
            &record.currency,
            registry,
            MoneyOptions {
                label: record.label.clone(),
                ..MoneyOptions::default()
            },
        )
    }

    /// Same value with a different amount; used by sign operations.
    fn with_minor_units(&self, minor_units: i64) -> Self {
        Self {
            minor_units,
            currency: Arc::clone(&self.currency),
            policy: self.policy,
            denomination: self.denomination,
            label: self.label.clone(),
        }
    }

    /// A derived value produced by arithmetic: new amount, given override
    /// tags, no label.
    pub(super) fn derived(
        &self,
        minor_units: i64,
        policy: Option<RoundingPolicy>,
        denomination: Option<i64>,
    ) -> Self {
        Self {
            minor_units,
            currency: Arc::clone(&self.currency),
            policy,
            denomination,
            label: None,
        }
    }
}

/// Serialized representation of a `Money` value, for logging and storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyRecord {
    /// Exact integer amount in minor units. Authoritative.
    pub minor_units: i64,
    /// Canonical currency code.
    pub currency: String,
    /// Derived major-unit amount. Informational only.
    pub major_units: Decimal,
    /// Optional caller-supplied annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Validates and splits constructor options.
fn unpack_options(
    options: MoneyOptions,
) -> Result<(Option<RoundingPolicy>, Option<i64>, Option<String>), MoneyError> {
    if let Some(denomination) = options.smallest_denomination
        && denomination < 1
    {
        return Err(MoneyError::InvalidDenomination(denomination));
    }
    Ok((
        options.rounding_policy,
        options.smallest_denomination,
        options.label,
    ))
}
