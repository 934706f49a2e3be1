//! Shared test helpers for integration tests.

use scholar_award::AwardEngine;
use scholar_core::constants::FULL_AWARD_FPL_RATIO;
use scholar_core::traits::AwardCalculator;
use scholar_core::types::{AwardAmounts, AwardBreakdown, AwardInput};
use scholar_core::validation::fpl_denominator;

/// Validated input, panicking on bad values.
pub fn input(agi: f64, household_size: u32) -> AwardInput {
    AwardInput::new(agi, household_size).unwrap()
}

/// Breakdown from the production engine.
pub fn breakdown(agi: f64, household_size: u32) -> AwardBreakdown {
    AwardEngine::new().breakdown(&input(agi, household_size))
}

/// Amounts from the production engine.
pub fn amounts(agi: f64, household_size: u32) -> AwardAmounts {
    AwardEngine::new().estimate(&input(agi, household_size))
}

/// `(k8, high)` in cents.
pub fn cents(amounts: AwardAmounts) -> (u64, u64) {
    (amounts.k8.cents(), amounts.high.cents())
}

/// Income that puts a household exactly on the full-award threshold.
pub fn threshold_agi(household_size: u32) -> f64 {
    FULL_AWARD_FPL_RATIO * fpl_denominator(household_size)
}

/// Award ratio written as `0.5^(x - 4.5)` with the floor applied, computed
/// independently of the engine's `(1/c)^4.5 * e^(ln(c) * x)` form.
pub fn reference_award_ratio(fpl_ratio: f64) -> f64 {
    if fpl_ratio <= 4.5 {
        1.0
    } else {
        0.5f64.powf(fpl_ratio - 4.5).max(0.1)
    }
}
