//! # scholar-award — Scholarship award engine.
//!
//! Maps a validated (income, household size) pair to award amounts:
//! - **FPL ratio**: income divided by the household poverty threshold.
//! - **Threshold**: ratios up to 4.5 receive the full award.
//! - **Decay**: above the threshold the award halves per unit of FPL ratio,
//!   floored at 10% of the maximum.
//! - **Amounts**: each grade band's maximum scaled by the award ratio,
//!   rounded to the cent.

pub mod curve;
pub mod engine;

pub use curve::{award_ratio, decay_ratio, floor_fpl_ratio};
pub use engine::{estimate_award, AwardEngine};
