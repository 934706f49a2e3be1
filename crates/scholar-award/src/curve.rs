//! The award ratio curve.
//!
//! Flat at [`MAX_AWARD_RATIO`] up to [`FULL_AWARD_FPL_RATIO`], then an
//! exponential decay anchored so that it passes through 1.0 at the threshold:
//!
//! ```text
//! ratio(x) = (1/c)^4.5 * e^(ln(c) * x)      c = DECAY_BASE = 0.5
//! ```
//!
//! which is `c^(x - 4.5)`: the award halves for each additional unit of FPL
//! ratio. The result is floored at [`MIN_AWARD_RATIO`], so it never reaches
//! zero.

use scholar_core::constants::{DECAY_BASE, FULL_AWARD_FPL_RATIO, MAX_AWARD_RATIO, MIN_AWARD_RATIO};

/// Raw decay curve, without the threshold or floor.
pub fn decay_ratio(fpl_ratio: f64) -> f64 {
    DECAY_BASE.recip().powf(FULL_AWARD_FPL_RATIO) * (DECAY_BASE.ln() * fpl_ratio).exp()
}

/// Award ratio for an FPL ratio: full award up to the threshold, decay above
/// it, never below the floor.
pub fn award_ratio(fpl_ratio: f64) -> f64 {
    if fpl_ratio <= FULL_AWARD_FPL_RATIO {
        return MAX_AWARD_RATIO;
    }
    decay_ratio(fpl_ratio).max(MIN_AWARD_RATIO)
}

/// FPL ratio at which the decay curve meets the floor (≈ 7.82).
///
/// Solves `c^(x - 4.5) = MIN_AWARD_RATIO` for `x`.
pub fn floor_fpl_ratio() -> f64 {
    FULL_AWARD_FPL_RATIO + MIN_AWARD_RATIO.ln() / DECAY_BASE.ln()
}
