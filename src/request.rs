//! Pricing requests

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tiers::MAX_LEVELS;

/// Errors raised when a pricing request fails precondition checks.
///
/// Every variant is a hard rejection; the solver never silently clamps an
/// out-of-range input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// Base price must be strictly positive.
    #[error("base price must be positive, got {0}")]
    NonPositiveBasePrice(Decimal),

    /// Target discount must lie within 0–100 percent.
    #[error("target discount must lie within 0-100%, got {0}")]
    DiscountOutOfRange(Decimal),

    /// Level count must lie within 1–10.
    #[error("level count must lie within 1-{MAX_LEVELS}, got {0}")]
    LevelsOutOfRange(usize),

    /// At least one subject must be billed.
    #[error("total subjects must be positive")]
    NoSubjects,

    /// Initial full-price subjects cannot outnumber the total.
    #[error("initial full-price subjects ({initial}) exceed total subjects ({total})")]
    InitialExceedsTotal {
        /// Subjects already billed at full price.
        initial: usize,
        /// Total subjects in the request.
        total: usize,
    },

    /// The price floor cannot be negative.
    #[error("price floor must not be negative, got {0}")]
    NegativeFloor(Decimal),

    /// The price floor cannot exceed the base price.
    #[error("price floor {floor} exceeds base price {base}")]
    FloorAboveBase {
        /// Requested minimum per-subject price.
        floor: Decimal,
        /// Undiscounted per-subject price.
        base: Decimal,
    },
}

/// Inputs for one staggered-pricing computation.
///
/// A request is a plain value; identical requests always solve to identical
/// schedules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRequest {
    /// Undiscounted per-subject price.
    pub base_price: Decimal,

    /// Target blended discount, in percent points (0–100).
    pub target_discount_percent: Decimal,

    /// Number of discount tiers (1–10).
    pub levels: usize,

    /// Total subjects, including the initial full-price block.
    pub total_subjects: usize,

    /// Subjects already committed at `base_price`, excluded from the ladder.
    pub initial_full_price_count: usize,

    /// Minimum permissible per-subject price in any discount tier.
    pub min_price_floor: Decimal,
}

impl PricingRequest {
    /// Checks every precondition the solver relies on.
    ///
    /// # Errors
    ///
    /// Returns the first [`RequestError`] violated, in field order.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.base_price <= Decimal::ZERO {
            return Err(RequestError::NonPositiveBasePrice(self.base_price));
        }

        if self.target_discount_percent < Decimal::ZERO
            || self.target_discount_percent > Decimal::ONE_HUNDRED
        {
            return Err(RequestError::DiscountOutOfRange(
                self.target_discount_percent,
            ));
        }

        if self.levels == 0 || self.levels > MAX_LEVELS {
            return Err(RequestError::LevelsOutOfRange(self.levels));
        }

        if self.total_subjects == 0 {
            return Err(RequestError::NoSubjects);
        }

        if self.initial_full_price_count > self.total_subjects {
            return Err(RequestError::InitialExceedsTotal {
                initial: self.initial_full_price_count,
                total: self.total_subjects,
            });
        }

        if self.min_price_floor < Decimal::ZERO {
            return Err(RequestError::NegativeFloor(self.min_price_floor));
        }

        if self.min_price_floor > self.base_price {
            return Err(RequestError::FloorAboveBase {
                floor: self.min_price_floor,
                base: self.base_price,
            });
        }

        Ok(())
    }

    /// Blended average price the target discount corresponds to.
    #[must_use]
    pub fn target_avg_price(&self) -> Decimal {
        self.base_price * (Decimal::ONE - self.target_discount_percent / Decimal::ONE_HUNDRED)
    }

    /// Subjects left to distribute across the discount tiers.
    #[must_use]
    pub fn remaining_subjects(&self) -> usize {
        self.total_subjects - self.initial_full_price_count
    }

    /// Revenue contributed by the initial full-price block.
    #[must_use]
    pub fn initial_revenue(&self) -> Decimal {
        Decimal::from(self.initial_full_price_count) * self.base_price
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

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

    #[test]
    fn valid_request_passes() -> TestResult {
        request().validate()?;

        Ok(())
    }

    #[test]
    fn zero_base_price_is_rejected() {
        let mut req = request();
        req.base_price = Decimal::ZERO;

        assert!(matches!(
            req.validate(),
            Err(RequestError::NonPositiveBasePrice(_))
        ));
    }

    #[test]
    fn discount_above_hundred_is_rejected() {
        let mut req = request();
        req.target_discount_percent = Decimal::from(101);

        assert!(matches!(
            req.validate(),
            Err(RequestError::DiscountOutOfRange(_))
        ));
    }

    #[test]
    fn negative_discount_is_rejected() {
        let mut req = request();
        req.target_discount_percent = Decimal::from(-1);

        assert!(matches!(
            req.validate(),
            Err(RequestError::DiscountOutOfRange(_))
        ));
    }

    #[test]
    fn zero_levels_is_rejected() {
        let mut req = request();
        req.levels = 0;

        assert!(matches!(
            req.validate(),
            Err(RequestError::LevelsOutOfRange(0))
        ));
    }

    #[test]
    fn eleven_levels_is_rejected() {
        let mut req = request();
        req.levels = 11;

        assert!(matches!(
            req.validate(),
            Err(RequestError::LevelsOutOfRange(11))
        ));
    }

    #[test]
    fn zero_subjects_is_rejected() {
        let mut req = request();
        req.total_subjects = 0;
        req.initial_full_price_count = 0;

        assert!(matches!(req.validate(), Err(RequestError::NoSubjects)));
    }

    #[test]
    fn initial_above_total_is_rejected() {
        let mut req = request();
        req.initial_full_price_count = 701;

        assert!(matches!(
            req.validate(),
            Err(RequestError::InitialExceedsTotal {
                initial: 701,
                total: 700
            })
        ));
    }

    #[test]
    fn negative_floor_is_rejected() {
        let mut req = request();
        req.min_price_floor = Decimal::from(-1);

        assert!(matches!(
            req.validate(),
            Err(RequestError::NegativeFloor(_))
        ));
    }

    #[test]
    fn floor_above_base_is_rejected() {
        let mut req = request();
        req.min_price_floor = Decimal::from(2001);

        assert!(matches!(
            req.validate(),
            Err(RequestError::FloorAboveBase { .. })
        ));
    }

    #[test]
    fn target_avg_price_halves_at_fifty_percent() {
        assert_eq!(request().target_avg_price(), Decimal::from(1000));
    }

    #[test]
    fn derived_counts_and_revenue() {
        let req = request();

        assert_eq!(req.remaining_subjects(), 660);
        assert_eq!(req.initial_revenue(), Decimal::from(80_000));
    }
}
