//! Award engine implementing the [`AwardCalculator`] trait.
//!
//! Combines the FPL ratio with the threshold-plus-decay curve in
//! [`crate::curve`] and scales each grade band's maximum award.

use scholar_core::constants::MAX_AWARD_RATIO;
use scholar_core::error::InvalidInputError;
use scholar_core::traits::AwardCalculator;
use scholar_core::types::{AwardAmounts, AwardInput};
use tracing::{debug, trace};

use crate::curve;

/// The production award calculator for the modeled program year.
#[derive(Debug, Clone, Copy, Default)]
pub struct AwardEngine;

impl AwardEngine {
    /// Create a new AwardEngine.
    pub fn new() -> Self {
        Self
    }
}

impl AwardCalculator for AwardEngine {
    fn award_ratio(&self, fpl_ratio: f64) -> f64 {
        let ratio = curve::award_ratio(fpl_ratio);
        if ratio < MAX_AWARD_RATIO {
            trace!(fpl_ratio, award_ratio = ratio, "award reduced by decay curve");
        }
        ratio
    }

    fn estimate(&self, input: &AwardInput) -> AwardAmounts {
        let breakdown = self.breakdown(input);
        debug!(
            agi = input.agi(),
            household_size = input.household_size(),
            fpl_ratio = breakdown.fpl_ratio,
            award_ratio = breakdown.award_ratio,
            k8_cents = breakdown.amounts.k8.cents(),
            high_cents = breakdown.amounts.high.cents(),
            "award estimated"
        );
        breakdown.amounts
    }
}

/// Estimate the award for raw numeric input.
///
/// Rejects `agi <= 0`, non-finite `agi`, and `household_size == 0` before
/// any arithmetic runs.
///
/// # Examples
///
/// ```
/// use scholar_award::estimate_award;
/// let amounts = estimate_award(45_000.0, 4).unwrap();
/// assert_eq!(amounts.k8.to_string(), "$6,166.00");
/// assert_eq!(amounts.high.to_string(), "$8,408.00");
/// ```
pub fn estimate_award(agi: f64, household_size: u32) -> Result<AwardAmounts, InvalidInputError> {
    let input = AwardInput::new(agi, household_size)?;
    Ok(AwardEngine::new().estimate(&input))
}
