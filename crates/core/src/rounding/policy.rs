//! Rounding policy selection.

use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

/// How a fractional minor-unit quantity is resolved to an integer.
///
/// The default is banker's rounding (round half to even), which avoids
/// systematic bias when the same values are rounded repeatedly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingPolicy {
    /// Ceiling: toward positive infinity.
    Up,
    /// Floor: toward negative infinity.
    Down,
    /// Round half away from zero.
    HalfUp,
    /// Round half to even (banker's rounding).
    #[default]
    #[serde(rename = "banker")]
    HalfEven,
}

impl RoundingPolicy {
    /// The `rust_decimal` strategy implementing this policy.
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::Up => RoundingStrategy::ToPositiveInfinity,
            Self::Down => RoundingStrategy::ToNegativeInfinity,
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl std::fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::HalfUp => write!(f, "half-up"),
            Self::HalfEven => write!(f, "banker"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_bankers() {
        assert_eq!(RoundingPolicy::default(), RoundingPolicy::HalfEven);
    }

    #[test]
    fn test_display() {
        assert_eq!(RoundingPolicy::Up.to_string(), "up");
        assert_eq!(RoundingPolicy::Down.to_string(), "down");
        assert_eq!(RoundingPolicy::HalfUp.to_string(), "half-up");
        assert_eq!(RoundingPolicy::HalfEven.to_string(), "banker");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&RoundingPolicy::Up).unwrap(),
            "\"up\""
        );
        assert_eq!(
            serde_json::to_string(&RoundingPolicy::Down).unwrap(),
            "\"down\""
        );
        assert_eq!(
            serde_json::to_string(&RoundingPolicy::HalfUp).unwrap(),
            "\"half-up\""
        );
        assert_eq!(
            serde_json::to_string(&RoundingPolicy::HalfEven).unwrap(),
            "\"banker\""
        );

        let parsed: RoundingPolicy = serde_json::from_str("\"half-up\"").unwrap();
        assert_eq!(parsed, RoundingPolicy::HalfUp);
        let parsed: RoundingPolicy = serde_json::from_str("\"banker\"").unwrap();
        assert_eq!(parsed, RoundingPolicy::HalfEven);
    }
}
