//! Schedule rendering

use std::io;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    report::{ReportError, ScheduleReport},
    request::PricingRequest,
    schedule::PricingSchedule,
};

/// Errors that can occur when writing a schedule.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Derived report figure was invalid.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// IO error
    #[error("IO error")]
    Io,
}

/// Writes the staggered pricing table and summary block.
///
/// The initial full-price block is reported as metric lines ahead of the
/// table, mirroring its special role: those subjects never enter the ladder.
///
/// # Errors
///
/// Returns a [`RenderError`] if the engagement period is out of range or the
/// output cannot be written.
pub fn write_schedule(
    mut out: impl io::Write,
    request: &PricingRequest,
    schedule: &PricingSchedule,
    report: &ScheduleReport,
    currency: &'static Currency,
    months: usize,
) -> Result<(), RenderError> {
    let monthly_revenue = report.monthly_revenue(months)?;

    write_initial_block(&mut out, report, currency)?;
    write_tier_table(&mut out, report, currency)?;
    write_summary(&mut out, request, schedule, currency, monthly_revenue)?;

    Ok(())
}

fn write_initial_block(
    out: &mut impl io::Write,
    report: &ScheduleReport,
    currency: &'static Currency,
) -> Result<(), RenderError> {
    let initial = report.initial();

    writeln!(out, "Initial Full-Price Subjects: {}", initial.subjects)
        .map_err(|_err| RenderError::Io)?;

    writeln!(out, "Initial Price: {}", money(initial.price, currency))
        .map_err(|_err| RenderError::Io)?;

    writeln!(out, "Initial Revenue: {}", money(initial.revenue, currency))
        .map_err(|_err| RenderError::Io)?;

    Ok(())
}

fn write_tier_table(
    out: &mut impl io::Write,
    report: &ScheduleReport,
    currency: &'static Currency,
) -> Result<(), RenderError> {
    let mut builder = Builder::default();

    builder.push_record([
        "Level",
        "Subjects",
        "Price",
        "Revenue",
        "Cumulative Subjects",
        "Effective Avg Price",
    ]);

    for (idx, row) in report.rows().iter().enumerate() {
        builder.push_record([
            format!("Level {}", idx + 1),
            row.subjects.to_string(),
            money(row.price, currency).to_string(),
            money(row.revenue, currency).to_string(),
            row.cumulative_subjects.to_string(),
            money(row.effective_avg_price, currency).to_string(),
        ]);
    }

    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(1..6), Alignment::right());

    writeln!(out, "\n{table}").map_err(|_err| RenderError::Io)
}

fn write_summary(
    out: &mut impl io::Write,
    request: &PricingRequest,
    schedule: &PricingSchedule,
    currency: &'static Currency,
    monthly_revenue: Decimal,
) -> Result<(), RenderError> {
    writeln!(
        out,
        "\nTotal Revenue: {}",
        money(schedule.total_revenue(), currency)
    )
    .map_err(|_err| RenderError::Io)?;

    writeln!(
        out,
        "Effective Average Price: {}",
        money(schedule.actual_avg_price(), currency)
    )
    .map_err(|_err| RenderError::Io)?;

    writeln!(
        out,
        "Estimated Monthly Revenue: {}",
        money(monthly_revenue, currency)
    )
    .map_err(|_err| RenderError::Io)?;

    writeln!(
        out,
        "Target Discount: {}%  Actual Discount: {}%",
        request.target_discount_percent.round_dp(2),
        schedule.actual_discount_percent().round_dp(2)
    )
    .map_err(|_err| RenderError::Io)?;

    if !schedule.target_reachable() {
        writeln!(
            out,
            "Warning: cannot achieve the target discount with the given price floor"
        )
        .map_err(|_err| RenderError::Io)?;
    }

    Ok(())
}

/// Display wrapper: schedules compute at full precision, but money prints at
/// two decimal places.
fn money(value: Decimal, currency: &'static Currency) -> Money<'static, Currency> {
    Money::from_decimal(value.round_dp(2), currency)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::INR;
    use testresult::TestResult;

    use super::*;
    use crate::schedule::solve;

    fn request() -> PricingRequest {
        PricingRequest {
            base_price: Decimal::from(2000),
            target_discount_percent: Decimal::from(50),
            levels: 5,
            total_subjects: 700,
            initial_full_price_count: 40,
            min_price_floor: Decimal::from(750),
        }
    }

    fn rendered(request: &PricingRequest, months: usize) -> Result<String, RenderError> {
        let schedule = solve(request).map_err(|_err| RenderError::Io)?;
        let report = ScheduleReport::new(request, &schedule);
        let mut out = Vec::new();

        write_schedule(&mut out, request, &schedule, &report, INR, months)?;

        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn renders_every_tier_and_the_summary() -> TestResult {
        let output = rendered(&request(), 12)?;

        assert!(output.contains("Initial Full-Price Subjects: 40"));
        assert!(output.contains("Level 1"));
        assert!(output.contains("Level 5"));
        assert!(output.contains("Total Revenue:"));
        assert!(output.contains("Estimated Monthly Revenue:"));
        assert!(output.contains("Target Discount: 50%"));

        Ok(())
    }

    #[test]
    fn reachable_target_renders_no_warning() -> TestResult {
        let output = rendered(&request(), 12)?;

        assert!(!output.contains("Warning:"));

        Ok(())
    }

    #[test]
    fn unreachable_target_renders_the_floor_warning() -> TestResult {
        let mut req = request();
        req.min_price_floor = Decimal::from(1500);

        let output = rendered(&req, 12)?;

        assert!(output.contains("Warning: cannot achieve the target discount"));

        Ok(())
    }

    #[test]
    fn out_of_range_months_fail_before_any_output() {
        let result = rendered(&request(), 0);

        assert!(matches!(
            result,
            Err(RenderError::Report(ReportError::MonthsOutOfRange(0)))
        ));
    }
}
