//! Property-based tests for monetary arithmetic.
//!
//! - Integer exactness: add then subtract restores the original amount
//! - Reconciliation: result tags follow the ordered first-explicit rule
//! - Multiplying by one is the identity for unit-denomination values

use proptest::prelude::*;
use rust_decimal::Decimal;
use tender_registry::CurrencyRegistry;

use crate::rounding::RoundingPolicy;

use super::value::{Money, MoneyOptions};

/// Amounts kept well inside the i64 range so sums cannot overflow.
fn amount() -> impl Strategy<Value = i64> {
    -1_000_000_000_000i64..1_000_000_000_000i64
}

/// Optional rounding policy override.
fn maybe_policy() -> impl Strategy<Value = Option<RoundingPolicy>> {
    prop_oneof![
        Just(None),
        Just(Some(RoundingPolicy::Up)),
        Just(Some(RoundingPolicy::Down)),
        Just(Some(RoundingPolicy::HalfUp)),
        Just(Some(RoundingPolicy::HalfEven)),
    ]
}

fn usd(amount: i64, policy: Option<RoundingPolicy>) -> Money {
    Money::from_minor_units(
        amount,
        "USD",
        CurrencyRegistry::builtin(),
        MoneyOptions {
            rounding_policy: policy,
            ..MoneyOptions::default()
        },
    )
    .expect("USD is a builtin currency")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// *For any* compatible values a and b, a + b - b == a. No drift.
    #[test]
    fn prop_add_subtract_round_trip(a in amount(), b in amount()) {
        let base = usd(a, None);
        let operand = usd(b, None);
        let result = base
            .add(std::slice::from_ref(&operand))
            .unwrap()
            .subtract(&[operand])
            .unwrap();
        prop_assert!(result.equals(&base).unwrap());
    }

    /// *For any* operand list, addition accumulates the plain integer sum.
    #[test]
    fn prop_add_matches_integer_sum(
        base in amount(),
        operands in prop::collection::vec(amount(), 0..8),
    ) {
        let base_value = usd(base, None);
        let operand_values: Vec<Money> = operands.iter().map(|&a| usd(a, None)).collect();
        let result = base_value.add(&operand_values).unwrap();
        let expected: i64 = base + operands.iter().sum::<i64>();
        prop_assert_eq!(result.minor_units(), expected);
    }

    /// *For any* mix of overrides, the result's policy tag is the base's
    /// override when present, else the first explicit operand override.
    #[test]
    fn prop_reconciliation_is_first_explicit(
        base_policy in maybe_policy(),
        operand_policies in prop::collection::vec(maybe_policy(), 0..6),
    ) {
        let base = usd(100, base_policy);
        let operands: Vec<Money> =
            operand_policies.iter().map(|&p| usd(1, p)).collect();
        let result = base.add(&operands).unwrap();

        let expected = base_policy
            .or_else(|| operand_policies.iter().copied().flatten().next());
        prop_assert_eq!(result.rounding_policy(), expected);
    }

    /// *For any* unit-denomination value, multiplying by one changes nothing.
    #[test]
    fn prop_multiply_by_one_is_identity(a in amount()) {
        let base = usd(a, None);
        let result = base.multiply(Decimal::ONE).unwrap();
        prop_assert_eq!(result.minor_units(), a);
    }

    /// *For any* value and nonzero integer scalar, multiply then divide by
    /// the same scalar restores the amount (denomination 1, exact quotient).
    #[test]
    fn prop_multiply_divide_round_trip(a in amount(), scalar in 1i64..10_000) {
        let base = usd(a, None);
        let scaled = base.multiply(Decimal::from(scalar)).unwrap();
        let restored = scaled.divide(Decimal::from(scalar)).unwrap();
        prop_assert_eq!(restored.minor_units(), a);
    }
}
