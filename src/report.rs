//! Schedule reporting

use rust_decimal::Decimal;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{request::PricingRequest, schedule::PricingSchedule, tiers::MAX_LEVELS};

/// Longest supported engagement period, in months.
pub const MAX_ENGAGEMENT_MONTHS: usize = 36;

/// Errors raised while deriving report figures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// Engagement period must lie within 1–36 months.
    #[error("engagement period must lie within 1-{MAX_ENGAGEMENT_MONTHS} months, got {0}")]
    MonthsOutOfRange(usize),
}

/// The initial full-price block, reported ahead of the tier rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialEntry {
    /// Subjects billed at full price before the ladder starts.
    pub subjects: usize,

    /// Per-subject price for the block (always the base price).
    pub price: Decimal,

    /// Revenue of the block.
    pub revenue: Decimal,
}

/// One tier of the cumulative schedule view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportRow {
    /// Per-subject price in this tier.
    pub price: Decimal,

    /// Subjects billed in this tier.
    pub subjects: usize,

    /// Revenue of this tier alone.
    pub revenue: Decimal,

    /// Subjects billed up to and including this tier, initial block included.
    pub cumulative_subjects: usize,

    /// Revenue up to and including this tier, initial block included.
    pub cumulative_revenue: Decimal,

    /// Blended average price after this tier; zero while nobody is billed.
    pub effective_avg_price: Decimal,
}

/// Cumulative view over a solved schedule.
///
/// A pure fold over the tier sequence prepended with the initial-subjects
/// pseudo-tier: one row per tier, with the initial block reported separately.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleReport {
    initial: InitialEntry,
    rows: SmallVec<[ReportRow; MAX_LEVELS]>,
    total_revenue: Decimal,
}

impl ScheduleReport {
    /// Folds a schedule into its cumulative view.
    #[must_use]
    pub fn new(request: &PricingRequest, schedule: &PricingSchedule) -> Self {
        let initial = InitialEntry {
            subjects: request.initial_full_price_count,
            price: request.base_price,
            revenue: request.initial_revenue(),
        };

        let mut cumulative_subjects = initial.subjects;
        let mut cumulative_revenue = initial.revenue;

        let rows = schedule
            .tiers()
            .iter()
            .map(|tier| {
                cumulative_subjects += tier.subjects();
                cumulative_revenue += tier.revenue();

                ReportRow {
                    price: tier.price(),
                    subjects: tier.subjects(),
                    revenue: tier.revenue(),
                    cumulative_subjects,
                    cumulative_revenue,
                    effective_avg_price: effective_avg(cumulative_revenue, cumulative_subjects),
                }
            })
            .collect();

        Self {
            initial,
            rows,
            total_revenue: schedule.total_revenue(),
        }
    }

    /// The initial full-price block.
    #[must_use]
    pub fn initial(&self) -> &InitialEntry {
        &self.initial
    }

    /// Per-tier cumulative rows, in ladder order.
    #[must_use]
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Revenue across the initial block and every tier.
    #[must_use]
    pub fn total_revenue(&self) -> Decimal {
        self.total_revenue
    }

    /// Average revenue per month over the engagement period.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MonthsOutOfRange`] unless `months` lies within
    /// 1–36.
    pub fn monthly_revenue(&self, months: usize) -> Result<Decimal, ReportError> {
        if months == 0 || months > MAX_ENGAGEMENT_MONTHS {
            return Err(ReportError::MonthsOutOfRange(months));
        }

        Ok(self.total_revenue / Decimal::from(months))
    }
}

/// Blended average price over everyone billed so far.
fn effective_avg(revenue: Decimal, subjects: usize) -> Decimal {
    if subjects == 0 {
        Decimal::ZERO
    } else {
        revenue / Decimal::from(subjects)
    }
}
