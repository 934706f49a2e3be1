//! Policy constants for the modeled program year. All monetary values in
//! dollars unless the name says cents.

/// Cents per dollar. Amounts are stored as whole cents.
pub const CENTS_PER_DOLLAR: u64 = 100;

/// Fixed part of the household poverty threshold, in dollars.
pub const FPL_BASE_AMOUNT: f64 = 10_150.0;

/// Poverty threshold added per household member, in dollars.
pub const FPL_PER_PERSON_AMOUNT: f64 = 5_500.0;

/// Highest FPL ratio that still qualifies for the full award.
///
/// Ratios at or below this value receive an award ratio of exactly 1.0.
pub const FULL_AWARD_FPL_RATIO: f64 = 4.5;

/// Base of the exponential decay curve applied above [`FULL_AWARD_FPL_RATIO`].
///
/// With `c = 0.5` the award halves for every additional unit of FPL ratio.
pub const DECAY_BASE: f64 = 0.5;

/// Award ratio granted at or below [`FULL_AWARD_FPL_RATIO`].
pub const MAX_AWARD_RATIO: f64 = 1.0;

/// Smallest award ratio. The decay curve is floored here and never reaches zero.
pub const MIN_AWARD_RATIO: f64 = 0.1;

/// Maximum award for grades K through 8, in dollars.
pub const K8_MAX_AWARD: f64 = 6_166.0;

/// Maximum award for grades 9 through 12, in dollars.
pub const HIGH_MAX_AWARD: f64 = 8_408.0;

/// Largest household size accepted by validation.
///
/// Far beyond any real household; keeps the integer conversion lossless.
pub const MAX_HOUSEHOLD_SIZE: u32 = 1_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_band_exceeds_k8_band() {
        assert!(HIGH_MAX_AWARD > K8_MAX_AWARD);
    }

    #[test]
    fn ratio_bounds_are_ordered() {
        assert!(MIN_AWARD_RATIO > 0.0);
        assert!(MIN_AWARD_RATIO < MAX_AWARD_RATIO);
    }

    #[test]
    fn decay_base_shrinks() {
        assert!(DECAY_BASE > 0.0 && DECAY_BASE < 1.0);
    }

    #[test]
    fn single_person_threshold() {
        assert_eq!(FPL_BASE_AMOUNT + FPL_PER_PERSON_AMOUNT, 15_650.0);
    }
}
