//! Utils

use clap::Parser;
use rust_decimal::Decimal;

use crate::request::PricingRequest;

/// Arguments for the schedule demos
#[derive(Debug, Parser)]
pub struct DemoScheduleArgs {
    /// Scenario file to load instead of the flag values
    #[clap(short, long)]
    pub scenario: Option<String>,

    /// Undiscounted per-subject price
    #[clap(short, long, default_value = "2000")]
    pub base_price: Decimal,

    /// Target blended discount in percent points
    #[clap(short, long, default_value = "50")]
    pub target_discount: Decimal,

    /// Number of discount tiers
    #[clap(short, long, default_value_t = 5)]
    pub levels: usize,

    /// Total subjects, including the initial full-price block
    #[clap(long, default_value_t = 700)]
    pub total_subjects: usize,

    /// Subjects already billed at full price
    #[clap(long, default_value_t = 40)]
    pub initial_full_price: usize,

    /// Minimum permissible tier price
    #[clap(short, long, default_value = "750")]
    pub floor: Decimal,

    /// ISO-4217 currency code used for display
    #[clap(short, long, default_value = "INR")]
    pub currency: String,

    /// Engagement period in months
    #[clap(short, long, default_value_t = 12)]
    pub months: usize,
}

impl DemoScheduleArgs {
    /// Builds a pricing request from the flag values.
    #[must_use]
    pub fn to_request(&self) -> PricingRequest {
        PricingRequest {
            base_price: self.base_price,
            target_discount_percent: self.target_discount,
            levels: self.levels,
            total_subjects: self.total_subjects,
            initial_full_price_count: self.initial_full_price,
            min_price_floor: self.floor,
        }
    }
}
