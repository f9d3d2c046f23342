//! Denomination-aware rounding.
//!
//! CRITICAL: every fractional intermediate in the engine flows through
//! `round_to_denomination` before it is stored. The result is always an
//! exact integer multiple of the smallest denomination, hence of one minor
//! unit - no currency-specific drift can accumulate.

use rust_decimal::Decimal;

use super::policy::RoundingPolicy;

/// Rounds a real-valued minor-unit quantity to a multiple of the smallest
/// denomination.
///
/// Computes `round(value / d, policy) * d` where the inner round applies the
/// policy to the quotient. With `denomination = 1` this reduces to plain
/// integer rounding; with e.g. `denomination = 10` results are multiples of
/// 10 minor units (a currency with 2 decimal places but no coin below 10
/// cents).
///
/// `denomination` must be at least 1; the engine validates overrides at
/// construction time.
#[must_use]
pub fn round_to_denomination(
    value: Decimal,
    policy: RoundingPolicy,
    denomination: i64,
) -> Decimal {
    debug_assert!(denomination >= 1);
    let increment = Decimal::from(denomination);
    (value / increment).round_dp_with_strategy(0, policy.strategy()) * increment
}
