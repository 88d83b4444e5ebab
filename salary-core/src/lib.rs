pub mod calculations;
pub mod models;
pub mod report;

pub use calculations::{NetSalaryCalculator, NetSalaryError};
pub use models::*;
