//! Schedule solving
//!
//! The solver works backwards from the target blended average price: it first
//! reserves the revenue of the initial full-price block, then derives the mean
//! the discount tiers must achieve, and finally shapes a descending linear
//! price ladder around that mean. A naive ladder from the base price down to
//! the target average misses the target, because the full-price block pulls
//! the blended mean upward.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::{
    request::{PricingRequest, RequestError},
    tiers::{Tier, TierVec, price_ladder, tier_counts},
};

/// A solved staggered pricing schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingSchedule {
    /// Tiers in descending price order; tier 1 is the most expensive.
    tiers: TierVec,

    /// Revenue across the initial block and every tier.
    total_revenue: Decimal,

    /// Blended average price over all subjects.
    actual_avg_price: Decimal,

    /// Achieved blended discount, as a fraction of the base price.
    actual_discount: Percentage,

    /// Whether the requested discount was achieved.
    ///
    /// False when the price floor (or an empty ladder) forces the schedule to
    /// settle for a smaller discount than requested.
    target_reachable: bool,
}

impl PricingSchedule {
    /// Tiers in descending price order.
    #[must_use]
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Revenue across the initial block and every tier.
    #[must_use]
    pub fn total_revenue(&self) -> Decimal {
        self.total_revenue
    }

    /// Blended average price over all subjects.
    #[must_use]
    pub fn actual_avg_price(&self) -> Decimal {
        self.actual_avg_price
    }

    /// Achieved blended discount as a fraction.
    #[must_use]
    pub fn actual_discount(&self) -> Percentage {
        self.actual_discount
    }

    /// Achieved blended discount in percent points.
    #[must_use]
    pub fn actual_discount_percent(&self) -> Decimal {
        (self.actual_discount * Decimal::ONE) * Decimal::ONE_HUNDRED
    }

    /// Whether the requested discount was achieved.
    #[must_use]
    pub fn target_reachable(&self) -> bool {
        self.target_reachable
    }
}

/// Computes the staggered pricing schedule for a request.
///
/// The schedule always satisfies the floor and descends monotonically; when
/// the floor makes the requested discount unreachable the result carries the
/// best achievable discount and [`PricingSchedule::target_reachable`] is
/// false. Infeasibility is a reported condition, not an error.
///
/// # Errors
///
/// Returns a [`RequestError`] when any input precondition is violated.
pub fn solve(request: &PricingRequest) -> Result<PricingSchedule, RequestError> {
    request.validate()?;

    let remaining = request.remaining_subjects();
    let initial_revenue = request.initial_revenue();

    if remaining == 0 {
        // Everyone is already billed at full price; the ladder carries no one
        // and the requested discount collapses to zero.
        let tiers: TierVec = (0..request.levels)
            .map(|_| Tier::new(request.base_price, 0))
            .collect();

        return Ok(PricingSchedule {
            tiers,
            total_revenue: initial_revenue,
            actual_avg_price: request.base_price,
            actual_discount: Percentage::from(Decimal::ZERO),
            target_reachable: request.target_discount_percent.is_zero(),
        });
    }

    let required_total = request.target_avg_price() * Decimal::from(request.total_subjects);
    let required_avg = (required_total - initial_revenue) / Decimal::from(remaining);

    let counts = tier_counts(remaining, request.levels);
    let (max_price, min_price, target_reachable) =
        ladder_bounds(request, required_avg, &counts, remaining);

    let tiers: TierVec = price_ladder(max_price, min_price, request.levels)
        .into_iter()
        .zip(counts)
        .map(|(price, subjects)| Tier::new(price, subjects))
        .collect();

    let levels_revenue: Decimal = tiers.iter().map(Tier::revenue).sum();
    let total_revenue = initial_revenue + levels_revenue;
    let actual_avg_price = total_revenue / Decimal::from(request.total_subjects);
    let discount_fraction = (request.base_price - actual_avg_price) / request.base_price;

    Ok(PricingSchedule {
        tiers,
        total_revenue,
        actual_avg_price,
        actual_discount: Percentage::from(discount_fraction),
        target_reachable,
    })
}

/// Derives the ladder endpoints whose count-weighted mean hits `required_avg`.
///
/// For uniformly occupied tiers this reduces to the symmetric identity
/// `mean = (max + min) / 2`, i.e. `min = 2 * required_avg - max`. The weighted
/// form keeps the blended target exact when the last tier absorbs a division
/// remainder and tilts the mean.
fn ladder_bounds(
    request: &PricingRequest,
    required_avg: Decimal,
    counts: &[usize],
    remaining: usize,
) -> (Decimal, Decimal, bool) {
    let base = request.base_price;
    let floor = request.min_price_floor;

    if request.levels == 1 {
        // A one-rung ladder has no spread; the rung itself must carry the mean.
        return if required_avg < floor {
            (floor, floor, false)
        } else {
            (required_avg, required_avg, true)
        };
    }

    let subjects = Decimal::from(remaining);
    let span = Decimal::from(request.levels - 1);

    // The last tier is always occupied, so this moment is nonzero whenever
    // remaining > 0 and levels > 1.
    let weight_below_max = moment(counts, |i| i);

    let step = (base - required_avg) * subjects / weight_below_max;
    let min = base - step * span;

    if min >= floor {
        return (base, min, true);
    }

    if required_avg < floor {
        // Every floor-respecting ladder overbills; flat pricing at the floor
        // is the closest the schedule can get to the target.
        return (floor, floor, false);
    }

    // required_avg >= floor rules out the everyone-in-the-last-tier shape, so
    // this moment is nonzero here.
    let weight_above_min = moment(counts, |i| request.levels - 1 - i);

    let step = (required_avg - floor) * subjects / weight_above_min;
    let max = floor + step * span;

    if max > base {
        (base, floor, false)
    } else {
        (max, floor, true)
    }
}

/// Occupancy moment: tier counts weighted by their distance from one end.
fn moment(counts: &[usize], distance: impl Fn(usize) -> usize) -> Decimal {
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| Decimal::from(distance(i) * count))
        .sum()
}
