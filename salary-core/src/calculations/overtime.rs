//! Overtime pay calculation.
//!
//! Overtime is paid from the hourly rate (gross salary divided by the
//! standard monthly working hours, 176 under the statutory policy) at
//! 1.5x, 2x and 3x multipliers per tier. Overtime pay is a non-taxable
//! premium: it is excluded from the taxable salary base and added back
//! only in the final net-salary aggregation.

use rust_decimal::Decimal;

use crate::calculations::common::round_vnd;

/// Computes total overtime pay, rounded to whole dong.
///
/// The hourly rate is kept unrounded so only the final sum is rounded.
/// Hours are assumed non-negative (caller validation) and
/// `monthly_working_hours` positive (policy validation).
pub fn overtime_pay(
    gross_salary: Decimal,
    ot_hours_15: Decimal,
    ot_hours_2: Decimal,
    ot_hours_3: Decimal,
    monthly_working_hours: Decimal,
) -> Decimal {
    let hourly_rate = gross_salary / monthly_working_hours;

    let pay = ot_hours_15 * hourly_rate * Decimal::new(15, 1)
        + ot_hours_2 * hourly_rate * Decimal::TWO
        + ot_hours_3 * hourly_rate * Decimal::from(3);

    round_vnd(pay)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const MONTHLY_HOURS: Decimal = Decimal::from_parts(176, 0, 0, false, 0);

    #[test]
    fn no_hours_means_no_pay() {
        let result = overtime_pay(dec!(20_000_000), dec!(0), dec!(0), dec!(0), MONTHLY_HOURS);

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn pays_ten_hours_at_one_and_a_half() {
        // 17,600,000 / 176 = 100,000 per hour.
        let result = overtime_pay(dec!(17_600_000), dec!(10), dec!(0), dec!(0), MONTHLY_HOURS);

        assert_eq!(result, dec!(1_500_000));
    }

    #[test]
    fn sums_all_three_tiers() {
        // Hourly 100,000: 10h * 1.5 + 4h * 2 + 2h * 3 = 2,900,000.
        let result = overtime_pay(dec!(17_600_000), dec!(10), dec!(4), dec!(2), MONTHLY_HOURS);

        assert_eq!(result, dec!(2_900_000));
    }

    #[test]
    fn rounds_inexact_hourly_rates_once_at_the_end() {
        // 20,000,000 / 176 = 113,636.3636...; 10h * 1.5 = 1,704,545.4545...
        let result = overtime_pay(dec!(20_000_000), dec!(10), dec!(0), dec!(0), MONTHLY_HOURS);

        assert_eq!(result, dec!(1_704_545));
    }

    #[test]
    fn fractional_hours_are_supported() {
        // Hourly 100,000: 0.5h * 2 = 100,000.
        let result = overtime_pay(dec!(17_600_000), dec!(0), dec!(0.5), dec!(0), MONTHLY_HOURS);

        assert_eq!(result, dec!(100_000));
    }
}
