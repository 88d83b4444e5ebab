//! Allowance resolution by employment type.
//!
//! Transport is a flat 1,760,000 VND per month at full attendance
//! (>= 22 working days) and pro-rated at 80,000 VND per day below that.
//! Outsource employees additionally receive the Mobifone and laptop
//! stipends, and all of these enter the taxable salary base. Internal
//! employees receive none of them through payroll; a separate gasoline
//! allowance applies to Internal staff but is handled outside this
//! engine, so the resolver only raises an advisory flag for it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EmploymentType, SalaryPolicy};

/// Allowances feeding the taxable salary base, plus the Internal-only
/// gasoline advisory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAllowances {
    /// Transport allowance entering the salary base; zero for Internal.
    pub transport: Decimal,

    /// Fixed stipends entering the salary base (Mobifone + laptop for
    /// Outsource); zero for Internal.
    pub fixed: Decimal,

    /// True when a gasoline allowance applies outside this calculation.
    pub gasoline_allowance_advisory: bool,
}

/// Resolves which allowances apply for the month.
pub fn resolve_allowances(
    employment_type: EmploymentType,
    working_days: u32,
    policy: &SalaryPolicy,
) -> ResolvedAllowances {
    match employment_type {
        EmploymentType::Outsource => ResolvedAllowances {
            transport: transport_allowance(working_days, policy),
            fixed: policy.mobifone_stipend + policy.laptop_stipend,
            gasoline_allowance_advisory: false,
        },
        // Internal pay excludes transport and stipends from the salary
        // base entirely; gasoline is paid through a separate channel.
        EmploymentType::Internal => ResolvedAllowances {
            transport: Decimal::ZERO,
            fixed: Decimal::ZERO,
            gasoline_allowance_advisory: true,
        },
    }
}

fn transport_allowance(
    working_days: u32,
    policy: &SalaryPolicy,
) -> Decimal {
    if working_days >= policy.full_attendance_days {
        policy.transport_full
    } else {
        policy.transport_per_day * Decimal::from(working_days)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn full_attendance_gets_flat_transport() {
        let policy = SalaryPolicy::statutory();

        let result = resolve_allowances(EmploymentType::Outsource, 22, &policy);

        assert_eq!(result.transport, dec!(1_760_000));
        assert!(!result.gasoline_allowance_advisory);
    }

    #[test]
    fn more_than_full_attendance_still_gets_flat_transport() {
        let policy = SalaryPolicy::statutory();

        let at_22 = resolve_allowances(EmploymentType::Outsource, 22, &policy);
        let at_30 = resolve_allowances(EmploymentType::Outsource, 30, &policy);

        assert_eq!(at_22.transport, at_30.transport);
    }

    #[test]
    fn partial_attendance_pro_rates_transport_per_day() {
        let policy = SalaryPolicy::statutory();

        let result = resolve_allowances(EmploymentType::Outsource, 10, &policy);

        assert_eq!(result.transport, dec!(800_000));
    }

    #[test]
    fn twenty_one_days_is_still_pro_rated() {
        let policy = SalaryPolicy::statutory();

        let result = resolve_allowances(EmploymentType::Outsource, 21, &policy);

        assert_eq!(result.transport, dec!(1_680_000));
    }

    #[test]
    fn outsource_gets_mobifone_and_laptop_stipends() {
        let policy = SalaryPolicy::statutory();

        let result = resolve_allowances(EmploymentType::Outsource, 22, &policy);

        assert_eq!(result.fixed, dec!(900_000));
    }

    #[test]
    fn internal_gets_no_base_allowances_but_a_gasoline_advisory() {
        let policy = SalaryPolicy::statutory();

        let result = resolve_allowances(EmploymentType::Internal, 22, &policy);

        assert_eq!(result.transport, Decimal::ZERO);
        assert_eq!(result.fixed, Decimal::ZERO);
        assert!(result.gasoline_allowance_advisory);
    }
}
