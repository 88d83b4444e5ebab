use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the progressive personal-income-tax schedule.
///
/// `min_income` is exclusive and `max_income` inclusive, so an income
/// exactly on a boundary is taxed entirely within the lower bracket.
/// `base_tax` is the cumulative tax of all lower brackets, letting the
/// tax for an income inside this bracket be computed as
/// `base_tax + (income - min_income) * tax_rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
    pub base_tax: Decimal,
}
