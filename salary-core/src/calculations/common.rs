//! Shared helpers for salary calculations.

use rust_decimal::Decimal;

/// Rounds a currency value to whole Vietnamese dong using half-up
/// rounding (midpoints away from zero). VND has no subunit, so every
/// derived amount in a breakdown passes through this.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::round_vnd;
///
/// assert_eq!(round_vnd(dec!(1234.4)), dec!(1234));
/// assert_eq!(round_vnd(dec!(1234.5)), dec!(1235));
/// assert_eq!(round_vnd(dec!(-1234.5)), dec!(-1235)); // Away from zero
/// ```
pub fn round_vnd(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100), dec!(200)), dec!(200));
/// assert_eq!(max(dec!(-100), dec!(0)), dec!(0));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_vnd tests
    // =========================================================================

    #[test]
    fn round_vnd_rounds_down_below_midpoint() {
        let result = round_vnd(dec!(100_000.4));

        assert_eq!(result, dec!(100_000));
    }

    #[test]
    fn round_vnd_rounds_up_at_midpoint() {
        let result = round_vnd(dec!(100_000.5));

        assert_eq!(result, dec!(100_001));
    }

    #[test]
    fn round_vnd_handles_negative_values() {
        let result = round_vnd(dec!(-100_000.5));

        assert_eq!(result, dec!(-100_001)); // Away from zero
    }

    #[test]
    fn round_vnd_preserves_whole_amounts() {
        let result = round_vnd(dec!(1_760_000));

        assert_eq!(result, dec!(1_760_000));
    }

    #[test]
    fn round_vnd_handles_repeating_division_results() {
        // 20,000,000 / 176 = 113,636.3636...
        let result = round_vnd(dec!(20_000_000) / dec!(176));

        assert_eq!(result, dec!(113_636));
    }

    // =========================================================================
    // max tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        let result = max(dec!(100), dec!(200));

        assert_eq!(result, dec!(200));
    }

    #[test]
    fn max_handles_equal_values() {
        let result = max(dec!(150), dec!(150));

        assert_eq!(result, dec!(150));
    }

    #[test]
    fn max_clamps_negative_against_zero() {
        let result = max(dec!(-2_500_000), Decimal::ZERO);

        assert_eq!(result, Decimal::ZERO);
    }
}
