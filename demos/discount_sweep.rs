//! Discount Sweep Demo
//!
//! Solves the same request at a range of target discounts and prints one
//! summary line per target, flagging the ones the price floor makes
//! unreachable.
//!
//! Run with: `cargo run --example discount_sweep`

use anyhow::Result;
use clap::Parser;
use rust_decimal::Decimal;

use stagger::{schedule::solve, utils::DemoScheduleArgs};

/// Discount Sweep Demo
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = DemoScheduleArgs::parse();

    for target in [30, 40, 50, 60, 70] {
        let mut request = args.to_request();
        request.target_discount_percent = Decimal::from(target);

        let schedule = solve(&request)?;

        let status = if schedule.target_reachable() {
            "exact"
        } else {
            "floor-limited"
        };

        println!(
            "target {target:>3}%  actual {:>6}%  avg price {:>10}  {status}",
            schedule.actual_discount_percent().round_dp(2),
            schedule.actual_avg_price().round_dp(2),
        );
    }

    Ok(())
}
