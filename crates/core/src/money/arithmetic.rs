//! Variadic addition/subtraction and scalar multiplication/division.
//!
//! Add and subtract accumulate exact integers, so they never round; they only
//! reconcile which policy and denomination tags the result carries forward.
//! Multiply and divide produce a `Decimal` intermediate and round it through
//! the receiver's own effective policy and denomination.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use crate::rounding::round_to_denomination;

use super::error::MoneyError;
use super::reconcile::first_explicit;
use super::value::Money;

impl Money {
    /// Adds zero or more operands to this value, left to right.
    ///
    /// Fails at the first operand with a different currency, returning no
    /// partial result. The result carries the policy and denomination tags
    /// resolved by reconciliation: the base's explicit override, else the
    /// first explicit operand override in argument order, else none.
    pub fn add(&self, operands: &[Money]) -> Result<Self, MoneyError> {
        let mut total = self.minor_units();
        for operand in operands {
            self.assert_same_currency(operand)?;
            total = total
                .checked_add(operand.minor_units())
                .ok_or(MoneyError::AmountOverflow)?;
        }
        Ok(self.reconciled(total, operands))
    }

    /// Subtracts zero or more operands from this value, left to right.
    ///
    /// Mismatch and reconciliation behavior is identical to [`Money::add`].
    pub fn subtract(&self, operands: &[Money]) -> Result<Self, MoneyError> {
        let mut total = self.minor_units();
        for operand in operands {
            self.assert_same_currency(operand)?;
            total = total
                .checked_sub(operand.minor_units())
                .ok_or(MoneyError::AmountOverflow)?;
        }
        Ok(self.reconciled(total, operands))
    }

    /// Multiplies this value by a decimal scalar.
    ///
    /// The intermediate is rounded with the receiver's effective policy and
    /// denomination; currency, policy, and denomination are copied from the
    /// receiver. No cross-operand reconciliation occurs, since there is only
    /// one monetary operand.
    pub fn multiply(&self, scalar: Decimal) -> Result<Self, MoneyError> {
        let scaled = Decimal::from(self.minor_units())
            .checked_mul(scalar)
            .ok_or(MoneyError::AmountOverflow)?;
        self.rounded(scaled)
    }

    /// Divides this value by a decimal scalar.
    ///
    /// Fails with `DivideByZero` when the scalar is exactly zero, before any
    /// computation; otherwise rounds identically to [`Money::multiply`].
    pub fn divide(&self, scalar: Decimal) -> Result<Self, MoneyError> {
        if scalar.is_zero() {
            return Err(MoneyError::DivideByZero);
        }
        let scaled = Decimal::from(self.minor_units())
            .checked_div(scalar)
            .ok_or(MoneyError::AmountOverflow)?;
        self.rounded(scaled)
    }

    /// Derived value with the policy/denomination tags reconciled across
    /// this value and the operands.
    fn reconciled(&self, minor_units: i64, operands: &[Money]) -> Self {
        self.derived(
            minor_units,
            first_explicit(
                self.rounding_policy(),
                operands.iter().map(Money::rounding_policy),
            ),
            first_explicit(
                self.denomination(),
                operands.iter().map(Money::denomination),
            ),
        )
    }

    /// Derived value from a fractional intermediate, rounded with the
    /// receiver's effective policy and denomination.
    fn rounded(&self, scaled: Decimal) -> Result<Self, MoneyError> {
        let minor_units =
            round_to_denomination(scaled, self.effective_policy(), self.effective_denomination())
                .to_i64()
                .ok_or(MoneyError::AmountOverflow)?;
        Ok(self.derived(minor_units, self.rounding_policy(), self.denomination()))
    }
}
