//! Calculation modules for the gross-to-net salary engine.
//!
//! The orchestrator in [`net_salary`] composes the allowance resolver,
//! the overtime calculator and the progressive tax table into one
//! [`SalaryBreakdown`](crate::models::SalaryBreakdown) per input.

pub mod allowances;
pub mod common;
pub mod net_salary;
pub mod overtime;
pub mod progressive_tax;

pub use allowances::{ResolvedAllowances, resolve_allowances};
pub use net_salary::{NetSalaryCalculator, NetSalaryError};
pub use overtime::overtime_pay;
pub use progressive_tax::{ProgressiveTaxError, ProgressiveTaxTable};
