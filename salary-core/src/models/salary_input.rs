use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::EmploymentType;

/// One month of validated payroll inputs for a single employee.
///
/// The engine does not re-validate: callers must supply non-negative
/// amounts and hours, a positive `working_days`, and apply their own
/// defaults (22 working days, 0 dependents) before constructing this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    pub employment_type: EmploymentType,

    /// Contractual base monthly pay before deductions, in VND.
    pub gross_salary: Decimal,

    /// Registered dependents for the dependent tax deduction.
    pub num_dependents: u32,

    /// Bonus plus on-call allowance for the month, in VND.
    pub bonus_and_on_call: Decimal,

    /// Overtime hours paid at 1.5x the hourly rate.
    pub ot_hours_15: Decimal,

    /// Overtime hours paid at 2x the hourly rate.
    pub ot_hours_2: Decimal,

    /// Overtime hours paid at 3x the hourly rate.
    pub ot_hours_3: Decimal,

    /// Days worked in the month; drives transport pro-rating.
    pub working_days: u32,
}
