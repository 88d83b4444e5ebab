use serde::{Deserialize, Serialize};

/// Employment classification. Outsource staff receive the transport,
/// Mobifone and laptop allowances inside their taxable salary base;
/// Internal staff do not (a separate gasoline allowance applies to them
/// outside this engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    Outsource,
    Internal,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Outsource => "Outsource",
            Self::Internal => "Internal",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Outsource" => Some(Self::Outsource),
            "Internal" => Some(Self::Internal),
            _ => None,
        }
    }
}
