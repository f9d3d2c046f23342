//! Currency metadata.
//!
//! Each currency carries its minor-unit divisor, display conventions, and the
//! smallest physical denomination in circulation. The divisor is a positive
//! power of 10; the smallest denomination is expressed in minor units and may
//! exceed 1 for currencies whose smallest coin is coarser than one minor unit.

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Metadata for a single currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Canonical uppercase ISO-like code (e.g. "USD").
    pub code: String,
    /// Full currency name (e.g. "United States Dollar").
    pub name: String,
    /// Display symbol (e.g. "$").
    pub symbol: String,
    /// Name of the minor unit (e.g. "Cent"). Empty for zero-decimal currencies.
    pub subunit: String,
    /// Minor units per major unit. Positive power of 10 (1 for zero-decimal currencies).
    pub minor_unit_divisor: i64,
    /// Smallest physical unit of tender, in minor units.
    pub smallest_denomination: i64,
    /// Whether the symbol precedes the amount (`$1.00`) or follows it (`1,00 €`).
    pub symbol_first: bool,
    /// Separator between the major and minor part.
    pub decimal_separator: String,
    /// Grouping separator for the major part.
    pub thousands_separator: String,
    /// ISO 4217 numeric code (e.g. "840").
    pub iso_numeric: String,
}

impl Currency {
    /// Number of minor-unit digits after the decimal separator.
    ///
    /// Derived from the divisor: 100 -> 2, 10 -> 1, 1 -> 0.
    #[must_use]
    pub fn exponent(&self) -> u32 {
        debug_assert!(self.minor_unit_divisor >= 1);
        self.minor_unit_divisor.unsigned_abs().ilog10()
    }

    /// Validates the numeric invariants of this entry.
    ///
    /// Called by the registry for every seeded currency.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if !is_power_of_ten(self.minor_unit_divisor) {
            return Err(RegistryError::InvalidMinorUnitDivisor {
                code: self.code.clone(),
                divisor: self.minor_unit_divisor,
            });
        }
        if self.smallest_denomination < 1 {
            return Err(RegistryError::InvalidSmallestDenomination {
                code: self.code.clone(),
                denomination: self.smallest_denomination,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Returns true for 1, 10, 100, 1000, ...
fn is_power_of_ten(value: i64) -> bool {
    if value < 1 {
        return false;
    }
    let mut v = value;
    while v % 10 == 0 {
        v /= 10;
    }
    v == 1
}
