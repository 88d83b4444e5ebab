//! Progressive personal-income-tax calculation.
//!
//! Vietnamese personal income tax is a marginal-bracket schedule: the
//! portion of taxable income falling within each bracket's span is taxed
//! at that bracket's rate. The statutory monthly table is:
//!
//! | Upper bound (inclusive) | Rate |
//! |-------------------------|------|
//! | 5,000,000               | 5%   |
//! | 10,000,000              | 10%  |
//! | 18,000,000              | 15%  |
//! | 32,000,000              | 20%  |
//! | 52,000,000              | 25%  |
//! | 80,000,000              | 30%  |
//! | unbounded               | 35%  |
//!
//! Bounds belong to the lower bracket: an income of exactly 5,000,000 is
//! taxed fully at 5%. Each [`TaxBracket`] carries the cumulative tax of
//! the brackets below it, so the tax inside a bracket is
//! `base_tax + (income - min_income) * rate`.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::calculations::ProgressiveTaxTable;
//! use salary_core::models::SalaryPolicy;
//!
//! let policy = SalaryPolicy::statutory();
//! let table = ProgressiveTaxTable::new(&policy.brackets);
//!
//! // 250,000 from the first bracket plus 160,000 taxed at 10%.
//! assert_eq!(table.tax_on(dec!(5_160_000)), Ok(dec!(266_000)));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::round_vnd;
use crate::models::TaxBracket;

/// Errors that can occur during progressive tax calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgressiveTaxError {
    /// No tax brackets were provided for the calculation.
    #[error("no tax brackets provided")]
    NoTaxBrackets,

    /// No tax bracket found for the given taxable income.
    #[error("no tax bracket found for taxable income {0}")]
    NoMatchingBracket(Decimal),
}

/// Marginal-bracket tax calculator over a borrowed bracket table.
///
/// The table is shared, read-only configuration; one instance can serve
/// any number of calculations.
#[derive(Debug, Clone)]
pub struct ProgressiveTaxTable<'a> {
    brackets: &'a [TaxBracket],
}

impl<'a> ProgressiveTaxTable<'a> {
    /// Creates a calculator over the given brackets.
    ///
    /// Brackets must be sorted ascending and contiguous, with the last
    /// bracket unbounded; [`SalaryPolicy::validate`] enforces this.
    ///
    /// [`SalaryPolicy::validate`]: crate::models::SalaryPolicy::validate
    pub fn new(brackets: &'a [TaxBracket]) -> Self {
        Self { brackets }
    }

    /// Computes the tax owed on `taxable_income`, rounded to whole dong.
    ///
    /// Non-positive income is taxed at zero. Callers clamp negative tax
    /// bases before calling; this guard is defensive.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressiveTaxError`] if the table is empty or no
    /// bracket spans the income (impossible for a validated policy).
    pub fn tax_on(
        &self,
        taxable_income: Decimal,
    ) -> Result<Decimal, ProgressiveTaxError> {
        if self.brackets.is_empty() {
            return Err(ProgressiveTaxError::NoTaxBrackets);
        }
        if taxable_income <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }

        // Lower bound exclusive, upper bound inclusive: an income exactly
        // on a bound lands in the lower bracket.
        let bracket = self
            .brackets
            .iter()
            .find(|b| {
                taxable_income > b.min_income
                    && b.max_income.is_none_or(|max| taxable_income <= max)
            })
            .ok_or(ProgressiveTaxError::NoMatchingBracket(taxable_income))?;

        let marginal_income = taxable_income - bracket.min_income;
        let tax = bracket.base_tax + marginal_income * bracket.tax_rate;

        Ok(round_vnd(tax))
    }
}
