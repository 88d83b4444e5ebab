//! Input parsing and validation for the command line.
//!
//! The engine assumes validated non-negative inputs, so every numeric
//! coercion happens here before a
//! [`SalaryInput`](salary_core::models::SalaryInput) is built.

use rust_decimal::Decimal;
use salary_core::models::EmploymentType;
use thiserror::Error;

/// Error returned when a command-line value cannot be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The value is not a number.
    #[error("invalid amount '{0}'")]
    NotANumber(String),

    /// The value parsed but is negative.
    #[error("amount must be non-negative, got {0}")]
    Negative(Decimal),

    /// The employment type is not one of the known classifications.
    #[error("unknown employment type '{0}' (expected Outsource or Internal)")]
    UnknownEmploymentType(String),
}

/// Normalizes input for decimal parsing: trims whitespace and removes
/// commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a non-negative currency or hours value.
///
/// Handles comma as thousands separator (e.g. `"20,000,000"`).
/// Empty or whitespace-only input is treated as 0.
pub fn parse_amount(s: &str) -> Result<Decimal, InputError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let value: Decimal = normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid amount: {}", e);
        InputError::NotANumber(s.to_string())
    })?;
    if value < Decimal::ZERO {
        return Err(InputError::Negative(value));
    }
    Ok(value)
}

/// Parses an employment type, case-insensitively.
pub fn parse_employment_type(s: &str) -> Result<EmploymentType, InputError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "outsource" => Ok(EmploymentType::Outsource),
        "internal" => Ok(EmploymentType::Internal),
        _ => Err(InputError::UnknownEmploymentType(s.to_string())),
    }
}
