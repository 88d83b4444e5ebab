//! Text rendering of a [`SalaryBreakdown`].
//!
//! Pure presentation: no amounts are computed here. Currency is shown
//! in whole dong with comma thousands separators, the conventional VND
//! display.

use std::fmt::Write;

use rust_decimal::Decimal;

use crate::calculations::common::round_vnd;
use crate::models::SalaryBreakdown;

/// Formats a currency amount as whole VND with thousands separators,
/// e.g. `1760000` → `"1,760,000"`.
pub fn format_vnd(amount: Decimal) -> String {
    let rounded = round_vnd(amount);
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    let first_group = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - first_group) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn line(
    out: &mut String,
    label: &str,
    amount: Decimal,
) {
    let _ = writeln!(out, "  {:<22} {:>15}", label, format_vnd(amount));
}

/// Renders the full grouped breakdown report.
///
/// Sections follow the payroll sheet layout: income (salary base plus
/// overtime), deductions (insurance, tax deductions, taxable income and
/// tax), then the net salary, with the gasoline advisory appended for
/// Internal employees.
pub fn render_report(breakdown: &SalaryBreakdown) -> String {
    let rule = "=".repeat(50);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "        GROSS TO NET SALARY BREAKDOWN");
    let _ = writeln!(out, "{rule}");

    let _ = writeln!(out, "\nINCOME:");
    line(&mut out, "Gross Salary:", breakdown.gross_salary);
    line(&mut out, "Transport:", breakdown.transport_allowance);
    line(&mut out, "Fixed Allowances:", breakdown.fixed_allowances);
    line(&mut out, "Bonus + On Call:", breakdown.bonus_and_on_call);
    line(&mut out, "OT Amount:", breakdown.ot_amount);
    let _ = writeln!(out, "  {}", "-".repeat(38));
    line(
        &mut out,
        "TOTAL INCOME:",
        breakdown.total_salary + breakdown.ot_amount,
    );

    let _ = writeln!(out, "\nDEDUCTIONS:");
    line(&mut out, "Insurance:", breakdown.insurance_deduction);
    line(&mut out, "Personal Deduction:", breakdown.personal_deduction);
    line(
        &mut out,
        "Dependent Deduction:",
        breakdown.dependent_deduction,
    );
    let _ = writeln!(out, "  {}", "-".repeat(38));
    line(&mut out, "Taxable Income:", breakdown.taxable_income);
    line(&mut out, "TAX AMOUNT:", breakdown.tax_amount);

    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(
        out,
        "  {:<22} {:>15} VND",
        "NET SALARY:",
        format_vnd(breakdown.net_salary)
    );
    let _ = writeln!(out, "{rule}");

    if breakdown.gasoline_allowance_advisory {
        let _ = writeln!(out, "  (Please add gasoline allowance)");
    }

    out
}
