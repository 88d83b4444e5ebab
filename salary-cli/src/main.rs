use anyhow::Context;
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use salary_cli::input::{parse_amount, parse_employment_type};
use salary_core::calculations::NetSalaryCalculator;
use salary_core::models::{EmploymentType, SalaryInput, SalaryPolicy};
use salary_core::report::render_report;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Gross-to-net salary calculator for Vietnamese payroll.
///
/// Applies statutory insurance, progressive personal income tax,
/// overtime premiums and employment-type allowances, then prints the
/// itemized breakdown.
#[derive(Debug, Parser)]
struct Cli {
    /// Monthly gross salary in VND (commas allowed, e.g. 20,000,000).
    #[arg(long, value_parser = parse_amount)]
    gross: Decimal,

    /// Employment classification: Outsource or Internal.
    #[arg(long = "type", default_value = "Outsource", value_parser = parse_employment_type)]
    employment_type: EmploymentType,

    /// Number of registered dependents.
    #[arg(long, default_value_t = 0)]
    dependents: u32,

    /// Bonus plus on-call allowance in VND.
    #[arg(long, default_value = "0", value_parser = parse_amount)]
    bonus: Decimal,

    /// Overtime hours paid at 1.5x.
    #[arg(long = "ot15", default_value = "0", value_parser = parse_amount)]
    ot_hours_15: Decimal,

    /// Overtime hours paid at 2x.
    #[arg(long = "ot2", default_value = "0", value_parser = parse_amount)]
    ot_hours_2: Decimal,

    /// Overtime hours paid at 3x.
    #[arg(long = "ot3", default_value = "0", value_parser = parse_amount)]
    ot_hours_3: Decimal,

    /// Days worked in the month.
    #[arg(long, default_value_t = 22, value_parser = clap::value_parser!(u32).range(1..))]
    working_days: u32,

    /// Output rendering.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Grouped human-readable report.
    Text,
    /// The breakdown as a JSON object.
    Json,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let input = SalaryInput {
        employment_type: cli.employment_type,
        gross_salary: cli.gross,
        num_dependents: cli.dependents,
        bonus_and_on_call: cli.bonus,
        ot_hours_15: cli.ot_hours_15,
        ot_hours_2: cli.ot_hours_2,
        ot_hours_3: cli.ot_hours_3,
        working_days: cli.working_days,
    };
    debug!(?input, "calculating net salary");

    let policy = SalaryPolicy::statutory();
    let breakdown = NetSalaryCalculator::new(&policy)
        .calculate(&input)
        .context("gross-to-net calculation failed")?;

    match cli.format {
        OutputFormat::Text => print!("{}", render_report(&breakdown)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&breakdown)
                .context("failed to serialize breakdown")?;
            println!("{json}");
        }
    }

    Ok(())
}
