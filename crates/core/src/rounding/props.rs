//! Property-based tests for denomination-aware rounding.
//!
//! - Reduction: with denomination 1 the engine matches the plain policy table
//! - Idempotence: rounding an already-rounded value changes nothing
//! - Granularity: results are always exact multiples of the denomination

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::denomination::round_to_denomination;
use super::policy::RoundingPolicy;

/// Strategy to generate quantities with up to 4 fractional digits,
/// roughly -10,000,000.0000 to +10,000,000.0000 minor units.
fn quantity() -> impl Strategy<Value = Decimal> {
    (-100_000_000_000i64..100_000_000_000i64).prop_map(|n| Decimal::new(n, 4))
}

/// Strategy to generate one of the four policies.
fn policy() -> impl Strategy<Value = RoundingPolicy> {
    prop_oneof![
        Just(RoundingPolicy::Up),
        Just(RoundingPolicy::Down),
        Just(RoundingPolicy::HalfUp),
        Just(RoundingPolicy::HalfEven),
    ]
}

/// Strategy to generate denominations (1 to 1000 minor units).
fn denomination() -> impl Strategy<Value = i64> {
    1i64..=1000
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// *For any* value and policy, denomination 1 reduces to the plain
    /// rounding-table rule.
    #[test]
    fn prop_unit_denomination_reduces_to_plain_rounding(
        value in quantity(),
        policy in policy(),
    ) {
        let result = round_to_denomination(value, policy, 1);
        let plain = value.round_dp_with_strategy(0, policy.strategy());
        prop_assert_eq!(result, plain);
    }

    /// *For any* value, policy, and denomination, rounding is idempotent.
    #[test]
    fn prop_round_is_idempotent(
        value in quantity(),
        policy in policy(),
        denomination in denomination(),
    ) {
        let once = round_to_denomination(value, policy, denomination);
        let twice = round_to_denomination(once, policy, denomination);
        prop_assert_eq!(once, twice);
    }

    /// *For any* value, policy, and denomination, the result is an exact
    /// integer multiple of the denomination.
    #[test]
    fn prop_result_is_multiple_of_denomination(
        value in quantity(),
        policy in policy(),
        denomination in denomination(),
    ) {
        let result = round_to_denomination(value, policy, denomination);
        let remainder = result % Decimal::from(denomination);
        prop_assert_eq!(remainder, Decimal::ZERO);
    }

    /// *For any* value, the rounded result differs from the input by less
    /// than one full denomination.
    #[test]
    fn prop_result_is_within_one_denomination(
        value in quantity(),
        policy in policy(),
        denomination in denomination(),
    ) {
        let result = round_to_denomination(value, policy, denomination);
        let distance = (result - value).abs();
        prop_assert!(distance < Decimal::from(denomination));
    }
}
