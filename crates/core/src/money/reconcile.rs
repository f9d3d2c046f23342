//! Cross-operand policy and denomination reconciliation.
//!
//! When one operation combines several monetary values, a single effective
//! rounding policy and a single effective denomination must be chosen for
//! the result. The rule is an ordered search: the base value's explicit
//! override wins; otherwise the first explicit override among the operands,
//! in argument order; otherwise the caller's default applies. Reordering
//! operands can change which override wins when the base carries none.

/// Returns the base override if explicit, else the first explicit operand
/// override in argument order, else `None`.
#[must_use]
pub fn first_explicit<T, I>(base: Option<T>, operands: I) -> Option<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    base.or_else(|| operands.into_iter().flatten().next())
}

#[cfg(test)]
mod tests {
    use crate::rounding::RoundingPolicy;

    use super::*;

    #[test]
    fn test_base_override_wins() {
        let result = first_explicit(
            Some(RoundingPolicy::Up),
            vec![Some(RoundingPolicy::Down), Some(RoundingPolicy::HalfUp)],
        );
        assert_eq!(result, Some(RoundingPolicy::Up));
    }

    #[test]
    fn test_first_explicit_operand_wins_when_base_is_unset() {
        let result = first_explicit(
            None,
            vec![None, Some(RoundingPolicy::Down), Some(RoundingPolicy::Up)],
        );
        assert_eq!(result, Some(RoundingPolicy::Down));
    }

    #[test]
    fn test_operand_order_is_significant() {
        let forward = first_explicit(
            None,
            vec![Some(RoundingPolicy::Down), Some(RoundingPolicy::Up)],
        );
        let reversed = first_explicit(
            None,
            vec![Some(RoundingPolicy::Up), Some(RoundingPolicy::Down)],
        );
        assert_eq!(forward, Some(RoundingPolicy::Down));
        assert_eq!(reversed, Some(RoundingPolicy::Up));
    }

    #[test]
    fn test_no_overrides_yields_none() {
        let result: Option<RoundingPolicy> = first_explicit(None, vec![None, None]);
        assert_eq!(result, None);

        let result: Option<RoundingPolicy> = first_explicit(None, vec![]);
        assert_eq!(result, None);
    }

    #[test]
    fn test_works_for_denominations_too() {
        assert_eq!(first_explicit(None, vec![None, Some(25), Some(10)]), Some(25));
        assert_eq!(first_explicit(Some(5), vec![Some(25)]), Some(5));
    }
}
