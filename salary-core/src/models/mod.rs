mod employment_type;
mod policy;
mod salary_breakdown;
mod salary_input;
mod tax_bracket;

pub use employment_type::EmploymentType;
pub use policy::{PolicyError, SalaryPolicy};
pub use salary_breakdown::SalaryBreakdown;
pub use salary_input::SalaryInput;
pub use tax_bracket::TaxBracket;
