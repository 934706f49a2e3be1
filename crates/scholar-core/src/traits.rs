//! Trait seam between validated input and an award formula.

use crate::types::{AwardAmounts, AwardBreakdown, AwardInput};
use crate::validation::fpl_denominator;

/// Award computation over validated input.
///
/// Implementations are pure: the same input always yields the same output,
/// and there is no shared mutable state, so one calculator can serve any
/// number of threads.
pub trait AwardCalculator: Send + Sync {
    /// Income as a multiple of the household poverty threshold.
    fn fpl_ratio(&self, input: &AwardInput) -> f64 {
        input.agi() / fpl_denominator(input.household_size())
    }

    /// Fraction of the maximum award for a given FPL ratio.
    ///
    /// Must stay within `[MIN_AWARD_RATIO, MAX_AWARD_RATIO]` and be
    /// non-increasing in `fpl_ratio`.
    fn award_ratio(&self, fpl_ratio: f64) -> f64;

    /// Dollar amounts for each grade band at `award_ratio`.
    fn amounts_for_ratio(&self, award_ratio: f64) -> AwardAmounts {
        AwardAmounts::from_ratio(award_ratio)
    }

    /// Estimated award amounts for `input`.
    fn estimate(&self, input: &AwardInput) -> AwardAmounts {
        self.breakdown(input).amounts
    }

    /// Estimate plus every intermediate value.
    fn breakdown(&self, input: &AwardInput) -> AwardBreakdown {
        let fpl_ratio = self.fpl_ratio(input);
        let award_ratio = self.award_ratio(fpl_ratio);
        AwardBreakdown {
            input: *input,
            fpl_denominator: fpl_denominator(input.household_size()),
            fpl_ratio,
            award_ratio,
            amounts: self.amounts_for_ratio(award_ratio),
        }
    }
}
