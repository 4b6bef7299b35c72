//! Stagger prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    render::{RenderError, write_schedule},
    report::{InitialEntry, MAX_ENGAGEMENT_MONTHS, ReportError, ReportRow, ScheduleReport},
    request::{PricingRequest, RequestError},
    scenario::{Scenario, ScenarioError},
    schedule::{PricingSchedule, solve},
    tiers::{MAX_LEVELS, Tier, TierVec},
};
