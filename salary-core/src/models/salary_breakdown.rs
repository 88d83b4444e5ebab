use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Itemized result of one gross-to-net calculation.
///
/// Every intermediate the report needs is carried here so presentation
/// layers never have to reach back into the policy. All amounts are in
/// whole VND.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Gross salary the calculation started from (echoed for the report).
    pub gross_salary: Decimal,

    /// Transport allowance included in the salary base; zero for
    /// Internal employees.
    pub transport_allowance: Decimal,

    /// Employment-type-specific fixed stipends (Mobifone + laptop for
    /// Outsource, zero for Internal).
    pub fixed_allowances: Decimal,

    /// Bonus plus on-call allowance (echoed for the report).
    pub bonus_and_on_call: Decimal,

    /// Taxable salary base: gross + transport + fixed allowances + bonus.
    /// Excludes overtime.
    pub total_salary: Decimal,

    /// Non-taxable overtime pay, added back after tax.
    pub ot_amount: Decimal,

    /// Composite employee insurance withheld from gross salary.
    pub insurance_deduction: Decimal,

    /// Personal deduction applied to the tax base.
    pub personal_deduction: Decimal,

    /// Total dependent deduction applied (dependents x per-dependent amount).
    pub dependent_deduction: Decimal,

    /// Tax base after deductions and insurance, floored at zero.
    pub taxable_income: Decimal,

    /// Progressive personal income tax on `taxable_income`.
    pub tax_amount: Decimal,

    /// Take-home pay: total salary - insurance - tax + overtime.
    pub net_salary: Decimal,

    /// Set for Internal employees: a separate gasoline allowance applies
    /// but is not modeled here. Informational only, never an amount.
    pub gasoline_allowance_advisory: bool,
}
