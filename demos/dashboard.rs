//! Dashboard Demo
//!
//! Solves a single staggered-pricing scenario and renders the full pricing
//! table: initial-block metrics, the per-tier ladder with cumulative figures,
//! and the revenue summary. Inputs come from flags, or from a YAML scenario
//! file via `--scenario`.
//!
//! Run with: `cargo run --example dashboard`

use anyhow::{Result, anyhow};
use clap::Parser;
use rusty_money::iso;

use stagger::{
    render::write_schedule, report::ScheduleReport, scenario::Scenario, schedule::solve,
    utils::DemoScheduleArgs,
};

/// Dashboard Demo
pub fn main() -> Result<()> {
    let args = DemoScheduleArgs::parse();

    let (request, currency, months) = match &args.scenario {
        Some(path) => {
            let scenario = Scenario::from_path(path)?;
            let currency = scenario.currency()?;

            (scenario.request, currency, scenario.engagement_months)
        }
        None => {
            let currency = iso::find(&args.currency)
                .ok_or_else(|| anyhow!("unknown currency code: {}", args.currency))?;

            (args.to_request(), currency, args.months)
        }
    };

    let schedule = solve(&request)?;
    let report = ScheduleReport::new(&request, &schedule);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    write_schedule(&mut handle, &request, &schedule, &report, currency, months)?;

    Ok(())
}
