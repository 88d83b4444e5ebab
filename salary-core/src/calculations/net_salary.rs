//! Gross-to-net salary orchestration.
//!
//! This module composes the allowance resolver, overtime calculator and
//! progressive tax table into the full monthly calculation:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Resolve transport and fixed allowances by employment type |
//! | 2    | Total salary = gross + transport + fixed allowances + bonus |
//! | 3    | Overtime pay from the hourly rate (non-taxable) |
//! | 4    | Insurance deduction = gross × composite insurance rate |
//! | 5    | Taxable income = total − personal deduction − dependents − insurance, floored at zero |
//! | 6    | Progressive tax on taxable income |
//! | 7    | Net salary = total − insurance − tax + overtime |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::calculations::NetSalaryCalculator;
//! use salary_core::models::{EmploymentType, SalaryInput, SalaryPolicy};
//!
//! let policy = SalaryPolicy::statutory();
//! let calculator = NetSalaryCalculator::new(&policy);
//!
//! let input = SalaryInput {
//!     employment_type: EmploymentType::Outsource,
//!     gross_salary: dec!(20_000_000),
//!     num_dependents: 1,
//!     bonus_and_on_call: dec!(0),
//!     ot_hours_15: dec!(0),
//!     ot_hours_2: dec!(0),
//!     ot_hours_3: dec!(0),
//!     working_days: 22,
//! };
//!
//! let breakdown = calculator.calculate(&input).unwrap();
//!
//! assert_eq!(breakdown.total_salary, dec!(22_660_000));
//! assert_eq!(breakdown.tax_amount, dec!(266_000));
//! assert_eq!(breakdown.net_salary, dec!(20_294_000));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::allowances::{ResolvedAllowances, resolve_allowances};
use crate::calculations::common::{max, round_vnd};
use crate::calculations::overtime::overtime_pay;
use crate::calculations::progressive_tax::{ProgressiveTaxError, ProgressiveTaxTable};
use crate::models::{PolicyError, SalaryBreakdown, SalaryInput, SalaryPolicy};

/// Errors that can occur during a gross-to-net calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetSalaryError {
    /// The salary policy failed structural validation.
    #[error("invalid salary policy: {0}")]
    Policy(#[from] PolicyError),

    /// The progressive tax table could not price the taxable income.
    #[error(transparent)]
    Tax(#[from] ProgressiveTaxError),
}

/// Calculator for one month's gross-to-net salary.
///
/// Borrows a [`SalaryPolicy`]; each [`calculate`](Self::calculate) call
/// is an independent pure computation, so one calculator can serve
/// concurrent callers without coordination.
#[derive(Debug, Clone)]
pub struct NetSalaryCalculator<'a> {
    policy: &'a SalaryPolicy,
}

impl<'a> NetSalaryCalculator<'a> {
    /// Creates a calculator over the given policy.
    pub fn new(policy: &'a SalaryPolicy) -> Self {
        Self { policy }
    }

    /// Runs the full gross-to-net calculation for one input.
    ///
    /// # Errors
    ///
    /// Returns [`NetSalaryError`] if the policy fails validation or the
    /// bracket table cannot price the taxable income; neither can happen
    /// with [`SalaryPolicy::statutory`].
    pub fn calculate(
        &self,
        input: &SalaryInput,
    ) -> Result<SalaryBreakdown, NetSalaryError> {
        self.policy.validate()?;

        let allowances = resolve_allowances(
            input.employment_type,
            input.working_days,
            self.policy,
        );

        let total_salary = self.total_salary(input, &allowances);

        let ot_amount = overtime_pay(
            input.gross_salary,
            input.ot_hours_15,
            input.ot_hours_2,
            input.ot_hours_3,
            self.policy.monthly_working_hours,
        );

        let insurance_deduction = self.insurance_deduction(input.gross_salary);
        let dependent_deduction = self.dependent_deduction(input.num_dependents);
        let taxable_income =
            self.taxable_income(total_salary, dependent_deduction, insurance_deduction);

        let tax_amount =
            ProgressiveTaxTable::new(&self.policy.brackets).tax_on(taxable_income)?;

        let net_salary = self.net_salary(total_salary, insurance_deduction, tax_amount, ot_amount);

        debug!(
            employment_type = input.employment_type.as_str(),
            %total_salary,
            %ot_amount,
            %insurance_deduction,
            %taxable_income,
            %tax_amount,
            %net_salary,
            "gross-to-net calculation complete"
        );

        Ok(SalaryBreakdown {
            gross_salary: input.gross_salary,
            transport_allowance: allowances.transport,
            fixed_allowances: allowances.fixed,
            bonus_and_on_call: input.bonus_and_on_call,
            total_salary,
            ot_amount,
            insurance_deduction,
            personal_deduction: self.policy.personal_deduction,
            dependent_deduction,
            taxable_income,
            tax_amount,
            net_salary,
            gasoline_allowance_advisory: allowances.gasoline_allowance_advisory,
        })
    }

    /// Taxable salary base: gross plus allowances plus bonus, excluding
    /// overtime. Internal allowances are zero by construction, so the
    /// formula is uniform across employment types.
    fn total_salary(
        &self,
        input: &SalaryInput,
        allowances: &ResolvedAllowances,
    ) -> Decimal {
        round_vnd(
            input.gross_salary + allowances.transport + allowances.fixed
                + input.bonus_and_on_call,
        )
    }

    /// Composite employee insurance, always computed on gross salary.
    fn insurance_deduction(
        &self,
        gross_salary: Decimal,
    ) -> Decimal {
        round_vnd(gross_salary * self.policy.insurance_rate())
    }

    /// Total dependent deduction for the month.
    fn dependent_deduction(
        &self,
        num_dependents: u32,
    ) -> Decimal {
        self.policy.dependent_deduction * Decimal::from(num_dependents)
    }

    /// Tax base after deductions and insurance, floored at zero. The
    /// floor is a business rule (deductions may exceed income), not an
    /// error.
    fn taxable_income(
        &self,
        total_salary: Decimal,
        dependent_deduction: Decimal,
        insurance_deduction: Decimal,
    ) -> Decimal {
        let before_clamp = round_vnd(
            total_salary - self.policy.personal_deduction - dependent_deduction
                - insurance_deduction,
        );
        if before_clamp < Decimal::ZERO {
            warn!(%before_clamp, "taxable income below zero, clamping to zero");
        }
        max(before_clamp, Decimal::ZERO)
    }

    /// Take-home pay, with the non-taxable overtime added back last.
    fn net_salary(
        &self,
        total_salary: Decimal,
        insurance_deduction: Decimal,
        tax_amount: Decimal,
        ot_amount: Decimal,
    ) -> Decimal {
        round_vnd(total_salary - insurance_deduction - tax_amount + ot_amount)
    }
}
