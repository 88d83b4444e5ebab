//! Statutory payroll parameters for the gross-to-net calculation.
//!
//! All constants the engine needs — allowance amounts, insurance rates,
//! tax deductions and the progressive bracket table — live in one
//! immutable [`SalaryPolicy`] value that is passed to the calculator.
//! [`SalaryPolicy::statutory`] builds the current Vietnamese schedule;
//! a future change in tax law only needs a new policy value, not new
//! logic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::TaxBracket;

/// Errors produced by [`SalaryPolicy::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// Monthly working hours divide the gross salary and must be positive.
    #[error("monthly working hours must be positive, got {0}")]
    InvalidMonthlyWorkingHours(Decimal),

    /// The composite insurance rate must be between 0 (inclusive) and 1.
    #[error("composite insurance rate must be between 0 and 1, got {0}")]
    InvalidInsuranceRate(Decimal),

    /// A currency amount in the policy is negative.
    #[error("{0} must be non-negative, got {1}")]
    NegativeAmount(&'static str, Decimal),

    /// The bracket table is empty.
    #[error("tax bracket table is empty")]
    EmptyBracketTable,

    /// The first bracket does not start at zero income.
    #[error("first tax bracket must start at zero, got {0}")]
    BracketTableGapAtZero(Decimal),

    /// A bracket does not continue exactly from the previous upper bound,
    /// or its upper bound does not exceed its lower bound.
    #[error("tax bracket starting at {0} breaks the increasing bound sequence")]
    NonContiguousBracket(Decimal),

    /// Bracket rates are not strictly increasing.
    #[error("tax bracket rates must be strictly increasing")]
    NonIncreasingBracketRates,

    /// A bracket other than the last has no upper bound.
    #[error("only the last tax bracket may be unbounded")]
    UnboundedInnerBracket,

    /// The last bracket has a finite upper bound.
    #[error("last tax bracket must be unbounded")]
    BoundedFinalBracket,

    /// A bracket's cumulative base tax does not equal the tax accumulated
    /// by the brackets below it.
    #[error("tax bracket starting at {min_income} has base tax {found}, expected {expected}")]
    InconsistentBaseTax {
        min_income: Decimal,
        expected: Decimal,
        found: Decimal,
    },
}

/// All statutory inputs to the gross-to-net calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryPolicy {
    /// Flat monthly transport allowance paid at full attendance.
    pub transport_full: Decimal,

    /// Daily transport allowance used below full attendance.
    pub transport_per_day: Decimal,

    /// Working days per month counting as full attendance.
    pub full_attendance_days: u32,

    /// Monthly Mobifone stipend (Outsource only).
    pub mobifone_stipend: Decimal,

    /// Monthly laptop stipend (Outsource only).
    pub laptop_stipend: Decimal,

    /// Personal income-tax deduction per month.
    pub personal_deduction: Decimal,

    /// Income-tax deduction per registered dependent per month.
    pub dependent_deduction: Decimal,

    /// Employee social insurance rate, applied to gross salary.
    pub social_insurance_rate: Decimal,

    /// Employee health insurance rate, applied to gross salary.
    pub health_insurance_rate: Decimal,

    /// Employee unemployment insurance rate, applied to gross salary.
    pub unemployment_insurance_rate: Decimal,

    /// Standard working hours per month; divides gross salary into the
    /// hourly rate used for overtime.
    pub monthly_working_hours: Decimal,

    /// Progressive tax schedule, ascending and contiguous, ending in an
    /// unbounded bracket.
    pub brackets: Vec<TaxBracket>,
}

impl SalaryPolicy {
    /// The statutory Vietnamese schedule: 10.5% employee insurance
    /// (8% social + 1.5% health + 1% unemployment), 11,000,000 VND
    /// personal and 4,400,000 VND per-dependent deductions, 176 working
    /// hours per month, and the seven-bracket progressive tax table.
    pub fn statutory() -> Self {
        Self {
            transport_full: Decimal::from(1_760_000),
            transport_per_day: Decimal::from(80_000),
            full_attendance_days: 22,
            mobifone_stipend: Decimal::from(450_000),
            laptop_stipend: Decimal::from(450_000),
            personal_deduction: Decimal::from(11_000_000),
            dependent_deduction: Decimal::from(4_400_000),
            social_insurance_rate: Decimal::new(8, 2),
            health_insurance_rate: Decimal::new(15, 3),
            unemployment_insurance_rate: Decimal::new(1, 2),
            monthly_working_hours: Decimal::from(176),
            brackets: statutory_brackets(),
        }
    }

    /// Composite employee insurance rate (social + health + unemployment).
    pub fn insurance_rate(&self) -> Decimal {
        self.social_insurance_rate + self.health_insurance_rate + self.unemployment_insurance_rate
    }

    /// Checks every structural invariant the calculators rely on.
    ///
    /// # Errors
    ///
    /// Returns the first [`PolicyError`] found. [`SalaryPolicy::statutory`]
    /// always validates cleanly.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.monthly_working_hours <= Decimal::ZERO {
            return Err(PolicyError::InvalidMonthlyWorkingHours(
                self.monthly_working_hours,
            ));
        }

        let insurance = self.insurance_rate();
        if insurance < Decimal::ZERO || insurance >= Decimal::ONE {
            return Err(PolicyError::InvalidInsuranceRate(insurance));
        }

        let amounts = [
            ("transport_full", self.transport_full),
            ("transport_per_day", self.transport_per_day),
            ("mobifone_stipend", self.mobifone_stipend),
            ("laptop_stipend", self.laptop_stipend),
            ("personal_deduction", self.personal_deduction),
            ("dependent_deduction", self.dependent_deduction),
        ];
        for (name, value) in amounts {
            if value < Decimal::ZERO {
                return Err(PolicyError::NegativeAmount(name, value));
            }
        }

        self.validate_brackets()
    }

    fn validate_brackets(&self) -> Result<(), PolicyError> {
        let Some(first) = self.brackets.first() else {
            return Err(PolicyError::EmptyBracketTable);
        };
        if first.min_income != Decimal::ZERO {
            return Err(PolicyError::BracketTableGapAtZero(first.min_income));
        }

        let mut expected_base = Decimal::ZERO;
        let last_index = self.brackets.len() - 1;

        for (i, bracket) in self.brackets.iter().enumerate() {
            if bracket.base_tax != expected_base {
                return Err(PolicyError::InconsistentBaseTax {
                    min_income: bracket.min_income,
                    expected: expected_base,
                    found: bracket.base_tax,
                });
            }
            if i > 0 && bracket.tax_rate <= self.brackets[i - 1].tax_rate {
                return Err(PolicyError::NonIncreasingBracketRates);
            }

            match bracket.max_income {
                Some(max) => {
                    if i == last_index {
                        return Err(PolicyError::BoundedFinalBracket);
                    }
                    if max <= bracket.min_income {
                        return Err(PolicyError::NonContiguousBracket(bracket.min_income));
                    }
                    if self.brackets[i + 1].min_income != max {
                        return Err(PolicyError::NonContiguousBracket(
                            self.brackets[i + 1].min_income,
                        ));
                    }
                    expected_base += (max - bracket.min_income) * bracket.tax_rate;
                }
                None => {
                    if i != last_index {
                        return Err(PolicyError::UnboundedInnerBracket);
                    }
                }
            }
        }

        Ok(())
    }
}

/// The seven statutory monthly brackets, with cumulative base tax
/// precomputed for each row.
fn statutory_brackets() -> Vec<TaxBracket> {
    let row = |min: i64, max: Option<i64>, rate_pct: i64, base: i64| TaxBracket {
        min_income: Decimal::from(min),
        max_income: max.map(Decimal::from),
        tax_rate: Decimal::new(rate_pct, 2),
        base_tax: Decimal::from(base),
    };

    vec![
        row(0, Some(5_000_000), 5, 0),
        row(5_000_000, Some(10_000_000), 10, 250_000),
        row(10_000_000, Some(18_000_000), 15, 750_000),
        row(18_000_000, Some(32_000_000), 20, 1_950_000),
        row(32_000_000, Some(52_000_000), 25, 4_750_000),
        row(52_000_000, Some(80_000_000), 30, 9_750_000),
        row(80_000_000, None, 35, 18_150_000),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn statutory_policy_validates() {
        assert_eq!(SalaryPolicy::statutory().validate(), Ok(()));
    }

    #[test]
    fn statutory_insurance_rate_is_ten_point_five_percent() {
        assert_eq!(SalaryPolicy::statutory().insurance_rate(), dec!(0.105));
    }

    #[test]
    fn statutory_table_has_seven_brackets_ending_unbounded() {
        let policy = SalaryPolicy::statutory();

        assert_eq!(policy.brackets.len(), 7);
        assert_eq!(policy.brackets.last().unwrap().max_income, None);
        assert_eq!(policy.brackets.last().unwrap().tax_rate, dec!(0.35));
    }

    #[test]
    fn validate_rejects_zero_working_hours() {
        let mut policy = SalaryPolicy::statutory();
        policy.monthly_working_hours = Decimal::ZERO;

        assert_eq!(
            policy.validate(),
            Err(PolicyError::InvalidMonthlyWorkingHours(Decimal::ZERO))
        );
    }

    #[test]
    fn validate_rejects_insurance_rate_of_one_or_more() {
        let mut policy = SalaryPolicy::statutory();
        policy.social_insurance_rate = dec!(0.985);

        assert_eq!(
            policy.validate(),
            Err(PolicyError::InvalidInsuranceRate(dec!(1.01)))
        );
    }

    #[test]
    fn validate_rejects_negative_stipend() {
        let mut policy = SalaryPolicy::statutory();
        policy.laptop_stipend = dec!(-1);

        assert_eq!(
            policy.validate(),
            Err(PolicyError::NegativeAmount("laptop_stipend", dec!(-1)))
        );
    }

    #[test]
    fn validate_rejects_empty_table() {
        let mut policy = SalaryPolicy::statutory();
        policy.brackets.clear();

        assert_eq!(policy.validate(), Err(PolicyError::EmptyBracketTable));
    }

    #[test]
    fn validate_rejects_table_not_starting_at_zero() {
        let mut policy = SalaryPolicy::statutory();
        policy.brackets[0].min_income = dec!(1);
        policy.brackets[0].base_tax = Decimal::ZERO;

        assert_eq!(
            policy.validate(),
            Err(PolicyError::BracketTableGapAtZero(dec!(1)))
        );
    }

    #[test]
    fn validate_rejects_gap_between_brackets() {
        let mut policy = SalaryPolicy::statutory();
        policy.brackets[1].min_income = dec!(6_000_000);

        assert_eq!(
            policy.validate(),
            Err(PolicyError::NonContiguousBracket(dec!(6_000_000)))
        );
    }

    #[test]
    fn validate_rejects_bounded_final_bracket() {
        let mut policy = SalaryPolicy::statutory();
        policy.brackets.last_mut().unwrap().max_income = Some(dec!(100_000_000));

        assert_eq!(policy.validate(), Err(PolicyError::BoundedFinalBracket));
    }

    #[test]
    fn validate_rejects_unbounded_inner_bracket() {
        let mut policy = SalaryPolicy::statutory();
        policy.brackets[2].max_income = None;

        assert_eq!(policy.validate(), Err(PolicyError::UnboundedInnerBracket));
    }

    #[test]
    fn validate_rejects_non_increasing_rates() {
        let mut policy = SalaryPolicy::statutory();
        policy.brackets[1].tax_rate = dec!(0.05);
        policy.brackets[1].base_tax = dec!(250_000);

        assert_eq!(
            policy.validate(),
            Err(PolicyError::NonIncreasingBracketRates)
        );
    }

    #[test]
    fn validate_rejects_wrong_cumulative_base_tax() {
        let mut policy = SalaryPolicy::statutory();
        policy.brackets[2].base_tax = dec!(700_000);

        assert_eq!(
            policy.validate(),
            Err(PolicyError::InconsistentBaseTax {
                min_income: dec!(10_000_000),
                expected: dec!(750_000),
                found: dec!(700_000),
            })
        );
    }
}
