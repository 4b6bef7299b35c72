//! Price tiers

use rust_decimal::Decimal;
use smallvec::{SmallVec, smallvec};

/// Upper bound on the number of discount tiers a request may ask for.
pub const MAX_LEVELS: usize = 10;

/// Tier sequence, inline up to [`MAX_LEVELS`].
pub type TierVec = SmallVec<[Tier; MAX_LEVELS]>;

/// One pricing bracket: a uniform price applied to a block of subjects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    price: Decimal,
    subjects: usize,
}

impl Tier {
    /// Creates a new tier.
    #[must_use]
    pub fn new(price: Decimal, subjects: usize) -> Self {
        Self { price, subjects }
    }

    /// Per-subject price in this tier.
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Number of subjects billed in this tier.
    #[must_use]
    pub fn subjects(&self) -> usize {
        self.subjects
    }

    /// Revenue contributed by this tier.
    #[must_use]
    pub fn revenue(&self) -> Decimal {
        self.price * Decimal::from(self.subjects)
    }
}

/// Splits `remaining` subjects across `levels` tiers.
///
/// The first `levels - 1` tiers each take `remaining / levels` (floored); the
/// last tier absorbs the remainder, so the counts always sum to `remaining`.
/// When `remaining < levels` the last tier is the only occupied one.
pub(crate) fn tier_counts(remaining: usize, levels: usize) -> SmallVec<[usize; MAX_LEVELS]> {
    let base_size = remaining / levels;
    let mut counts: SmallVec<[usize; MAX_LEVELS]> = smallvec![base_size; levels];

    if let Some(last) = counts.last_mut() {
        *last = remaining - base_size * (levels - 1);
    }

    counts
}

/// Generates `levels` equally spaced descending prices from `max` to `min`.
///
/// The first entry is exactly `max` and the last exactly `min`; intermediate
/// entries are linearly interpolated. A single-level ladder is just `[max]`.
pub(crate) fn price_ladder(
    max: Decimal,
    min: Decimal,
    levels: usize,
) -> SmallVec<[Decimal; MAX_LEVELS]> {
    if levels <= 1 {
        return smallvec![max];
    }

    let step = (max - min) / Decimal::from(levels - 1);
    let mut prices: SmallVec<[Decimal; MAX_LEVELS]> = (0..levels)
        .map(|i| max - step * Decimal::from(i))
        .collect();

    // Pin the endpoint so the floor survives division rounding.
    if let Some(last) = prices.last_mut() {
        *last = min;
    }

    prices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_revenue_is_price_times_count() {
        let tier = Tier::new(Decimal::from(750), 132);

        assert_eq!(tier.revenue(), Decimal::from(99_000));
    }

    #[test]
    fn counts_split_evenly_when_divisible() {
        let counts = tier_counts(660, 5);

        assert_eq!(counts.as_slice(), &[132, 132, 132, 132, 132]);
    }

    #[test]
    fn last_tier_absorbs_the_remainder() {
        let counts = tier_counts(99, 4);

        assert_eq!(counts.as_slice(), &[24, 24, 24, 27]);
        assert_eq!(counts.iter().sum::<usize>(), 99);
    }

    #[test]
    fn sparse_population_lands_in_last_tier() {
        let counts = tier_counts(3, 5);

        assert_eq!(counts.as_slice(), &[0, 0, 0, 0, 3]);
    }

    #[test]
    fn zero_remaining_yields_all_empty_tiers() {
        let counts = tier_counts(0, 3);

        assert_eq!(counts.as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn ladder_endpoints_are_exact() {
        let prices = price_ladder(Decimal::from(1000), Decimal::from(400), 4);

        assert_eq!(
            prices.as_slice(),
            &[
                Decimal::from(1000),
                Decimal::from(800),
                Decimal::from(600),
                Decimal::from(400)
            ]
        );
    }

    #[test]
    fn ladder_is_monotonically_non_increasing() {
        let prices = price_ladder(Decimal::from(1129), Decimal::from(750), 7);

        for pair in prices.windows(2) {
            if let [hi, lo] = pair {
                assert!(hi >= lo, "ladder must descend");
            }
        }
    }

    #[test]
    fn single_level_ladder_is_the_max() {
        let prices = price_ladder(Decimal::from(900), Decimal::from(100), 1);

        assert_eq!(prices.as_slice(), &[Decimal::from(900)]);
    }

    #[test]
    fn flat_ladder_repeats_one_price() {
        let prices = price_ladder(Decimal::from(750), Decimal::from(750), 3);

        assert_eq!(
            prices.as_slice(),
            &[Decimal::from(750), Decimal::from(750), Decimal::from(750)]
        );
    }
}
