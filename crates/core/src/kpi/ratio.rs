//! Ratios whose denominator may be zero.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// A performance ratio.
///
/// `Undefined` marks a zero (or negative) denominator. On the wire it is
/// written as `0` so existing clients keep working, and the report lists the
/// metric name in `undefined_metrics` so it is never read as a real zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ratio {
    /// Ratio computed from a strictly positive denominator.
    Defined(Decimal),
    /// Denominator was zero; reported as the sentinel `0`.
    Undefined,
}

impl Ratio {
    /// Divides `numerator` by `denominator` when the denominator is positive.
    ///
    /// A quotient outside the `Decimal` range saturates at `Decimal::MAX`
    /// (or `Decimal::MIN` for a negative numerator).
    #[must_use]
    pub fn of(numerator: Decimal, denominator: Decimal) -> Self {
        if denominator <= Decimal::ZERO {
            return Self::Undefined;
        }
        let bound = if numerator.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        };
        Self::Defined(numerator.checked_div(denominator).unwrap_or(bound))
    }

    /// Multiplies a defined ratio, e.g. by 100 for a percentage.
    #[must_use]
    pub fn scaled(self, factor: Decimal) -> Self {
        match self {
            Self::Defined(value) => Self::Defined(value.saturating_mul(factor)),
            Self::Undefined => Self::Undefined,
        }
    }

    /// Rounds a defined ratio to `dp` decimal places.
    #[must_use]
    pub fn rounded(self, dp: u32) -> Self {
        match self {
            Self::Defined(value) => Self::Defined(value.round_dp(dp)),
            Self::Undefined => Self::Undefined,
        }
    }

    /// The externally visible value: the ratio, or `0` when undefined.
    #[must_use]
    pub fn value(self) -> Decimal {
        match self {
            Self::Defined(value) => value,
            Self::Undefined => Decimal::ZERO,
        }
    }

    /// Returns `true` when the denominator was positive.
    #[must_use]
    pub const fn is_defined(self) -> bool {
        matches!(self, Self::Defined(_))
    }

    /// Returns the ratio, or `None` when undefined.
    #[must_use]
    pub const fn as_option(self) -> Option<Decimal> {
        match self {
            Self::Defined(value) => Some(value),
            Self::Undefined => None,
        }
    }
}

impl Serialize for Ratio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&self.value(), serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_denominator_is_undefined() {
        assert_eq!(Ratio::of(dec!(10), Decimal::ZERO), Ratio::Undefined);
        assert_eq!(Ratio::of(dec!(10), dec!(-5)), Ratio::Undefined);
    }

    #[test]
    fn test_undefined_stays_undefined_through_scaling() {
        let ratio = Ratio::Undefined.scaled(Decimal::ONE_HUNDRED).rounded(2);
        assert_eq!(ratio, Ratio::Undefined);
        assert_eq!(ratio.value(), Decimal::ZERO);
        assert!(ratio.as_option().is_none());
    }

    #[test]
    fn test_defined_zero_is_distinct_from_undefined() {
        let ratio = Ratio::of(Decimal::ZERO, dec!(100));
        assert!(ratio.is_defined());
        assert_eq!(ratio.value(), Decimal::ZERO);
        assert_ne!(ratio, Ratio::Undefined);
    }

    #[test]
    fn test_overflowing_quotient_saturates() {
        assert_eq!(Ratio::of(Decimal::MAX, dec!(0.5)), Ratio::Defined(Decimal::MAX));
        assert_eq!(Ratio::of(Decimal::MIN, dec!(0.5)), Ratio::Defined(Decimal::MIN));
        let percent = Ratio::of(Decimal::MAX, dec!(0.5))
            .scaled(Decimal::ONE_HUNDRED)
            .rounded(2);
        assert_eq!(percent, Ratio::Defined(Decimal::MAX));
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_value(Ratio::Defined(dec!(1.07))).unwrap();
        assert_eq!(json, serde_json::json!(1.07));
        let json = serde_json::to_value(Ratio::Undefined).unwrap();
        assert_eq!(json, serde_json::json!(0.0));
    }

    #[test]
    fn test_percentage_rounding() {
        let ratio = Ratio::of(dec!(1400), dec!(1500))
            .scaled(Decimal::ONE_HUNDRED)
            .rounded(2);
        assert_eq!(ratio, Ratio::Defined(dec!(93.33)));
    }
}
