//! Presentation of estimates as text or JSON.

use anyhow::Result;
use scholar_core::constants::{
    DECAY_BASE, FPL_BASE_AMOUNT, FPL_PER_PERSON_AMOUNT, FULL_AWARD_FPL_RATIO, HIGH_MAX_AWARD,
    K8_MAX_AWARD, MIN_AWARD_RATIO,
};
use scholar_core::types::{AwardAmounts, AwardBreakdown, GradeBand, Usd};
use serde::Serialize;

/// Shown in place of an amount that came out as zero.
pub const INELIGIBLE: &str = "ineligible";

/// One row of an income schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScheduleRow {
    pub agi: f64,
    pub fpl_ratio: f64,
    pub award_ratio: f64,
    pub k8: Usd,
    pub high: Usd,
}

impl From<&AwardBreakdown> for ScheduleRow {
    fn from(b: &AwardBreakdown) -> Self {
        Self {
            agi: b.input.agi(),
            fpl_ratio: b.fpl_ratio,
            award_ratio: b.award_ratio,
            k8: b.amounts.k8,
            high: b.amounts.high,
        }
    }
}

/// Currency string for an amount, or the ineligible marker for zero.
pub fn display_amount(amount: Usd) -> String {
    if amount.is_zero() {
        INELIGIBLE.to_string()
    } else {
        amount.to_string()
    }
}

fn band_lines(amounts: &AwardAmounts) -> impl Iterator<Item = String> + '_ {
    amounts
        .iter()
        .map(|(band, amount)| format!("{:<6}{}", format!("{band}:"), display_amount(amount)))
}

/// Text rendering of a single estimate.
pub fn estimate_text(breakdown: &AwardBreakdown, explain: bool) -> String {
    let mut lines = Vec::new();
    if explain {
        lines.push(format!("Household size: {}", breakdown.input.household_size()));
        lines.push(format!(
            "AGI:            {}",
            Usd::from_dollars_saturating(breakdown.input.agi())
        ));
        lines.push(format!(
            "FPL threshold:  {}",
            Usd::from_dollars_saturating(breakdown.fpl_denominator)
        ));
        lines.push(format!("FPL ratio:      {:.4}", breakdown.fpl_ratio));
        lines.push(format!("Award ratio:    {:.4}", breakdown.award_ratio));
        lines.push(String::new());
    }
    lines.extend(band_lines(&breakdown.amounts));
    lines.join("\n")
}

/// JSON rendering of a single estimate: just the amounts, or the full
/// breakdown with `explain`.
pub fn estimate_json(breakdown: &AwardBreakdown, explain: bool) -> Result<String> {
    let json = if explain {
        serde_json::to_string_pretty(breakdown)?
    } else {
        serde_json::to_string_pretty(&breakdown.amounts)?
    };
    Ok(json)
}

/// Text table of a schedule.
pub fn schedule_text(household_size: u32, rows: &[ScheduleRow]) -> String {
    let header = format!(
        "{:>16}  {:>9}  {:>11}  {:>12}  {:>12}",
        "AGI",
        "FPL ratio",
        "Award ratio",
        GradeBand::K8.label(),
        GradeBand::High.label()
    );
    let body = rows.iter().map(|row| {
        format!(
            "{:>16}  {:>9.4}  {:>11.4}  {:>12}  {:>12}",
            Usd::from_dollars_saturating(row.agi).to_string(),
            row.fpl_ratio,
            row.award_ratio,
            display_amount(row.k8),
            display_amount(row.high)
        )
    });

    [format!("Household size: {household_size}"), header]
        .into_iter()
        .chain(body)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn schedule_json(rows: &[ScheduleRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// Text listing of the fixed policy constants.
pub fn constants_text() -> String {
    [
        format!("FPL base amount:        {}", Usd::from_dollars_saturating(FPL_BASE_AMOUNT)),
        format!("FPL per-person amount:  {}", Usd::from_dollars_saturating(FPL_PER_PERSON_AMOUNT)),
        format!("Full award up to ratio: {FULL_AWARD_FPL_RATIO}"),
        format!("Decay base:             {DECAY_BASE}"),
        format!("Minimum award ratio:    {MIN_AWARD_RATIO}"),
        format!("K-8 maximum award:      {}", Usd::from_dollars_saturating(K8_MAX_AWARD)),
        format!("9-12 maximum award:     {}", Usd::from_dollars_saturating(HIGH_MAX_AWARD)),
    ]
    .join("\n")
}

pub fn constants_json() -> Result<String> {
    let value = serde_json::json!({
        "fpl_base_amount": FPL_BASE_AMOUNT,
        "fpl_per_person_amount": FPL_PER_PERSON_AMOUNT,
        "full_award_fpl_ratio": FULL_AWARD_FPL_RATIO,
        "decay_base": DECAY_BASE,
        "min_award_ratio": MIN_AWARD_RATIO,
        "k8_max_award": K8_MAX_AWARD,
        "high_max_award": HIGH_MAX_AWARD,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}
