//! Value types shared across the estimator: currency amounts, grade bands,
//! validated inputs and computation results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{CENTS_PER_DOLLAR, HIGH_MAX_AWARD, K8_MAX_AWARD};
use crate::error::AmountError;

// --- Usd ---

/// A non-negative dollar amount held as whole cents.
///
/// Serializes as a plain JSON number of dollars (`6166.0`, `616.6`), which is
/// what downstream consumers of the estimate expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct Usd(u64);

impl Usd {
    pub const ZERO: Self = Self(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Dollar value as a float, e.g. `616.6` for 61,660 cents.
    pub fn as_dollars(self) -> f64 {
        self.0 as f64 / CENTS_PER_DOLLAR as f64
    }

    /// Round a dollar figure to the nearest cent, half away from zero.
    ///
    /// Rejects negative and non-finite values.
    pub fn from_dollars(dollars: f64) -> Result<Self, AmountError> {
        if !dollars.is_finite() {
            return Err(AmountError::NonFinite);
        }
        if dollars < 0.0 {
            return Err(AmountError::Negative(dollars));
        }
        let cents = (dollars * CENTS_PER_DOLLAR as f64).round();
        if cents >= u64::MAX as f64 {
            return Err(AmountError::Overflow(dollars));
        }
        Ok(Self(cents as u64))
    }

    /// Like [`Usd::from_dollars`] but saturating: NaN and negatives become
    /// zero, values past the cent range become `u64::MAX` cents.
    pub fn from_dollars_saturating(dollars: f64) -> Self {
        Self((dollars * CENTS_PER_DOLLAR as f64).round() as u64)
    }
}

impl From<Usd> for f64 {
    fn from(amount: Usd) -> Self {
        amount.as_dollars()
    }
}

impl TryFrom<f64> for Usd {
    type Error = AmountError;

    fn try_from(dollars: f64) -> Result<Self, Self::Error> {
        Self::from_dollars(dollars)
    }
}

impl fmt::Display for Usd {
    /// `$6,166.00` style: dollar sign, thousands separators, two decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dollars = (self.0 / CENTS_PER_DOLLAR).to_string();
        let cents = self.0 % CENTS_PER_DOLLAR;

        let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
        for (i, ch) in dollars.chars().enumerate() {
            if i > 0 && (dollars.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        write!(f, "${grouped}.{cents:02}")
    }
}

// --- GradeBand ---

/// Grade bands with distinct award ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeBand {
    /// Kindergarten through grade 8.
    K8,
    /// Grades 9 through 12.
    High,
}

impl GradeBand {
    pub const ALL: [GradeBand; 2] = [GradeBand::K8, GradeBand::High];

    /// Maximum award for this band, in dollars.
    pub const fn max_award(self) -> f64 {
        match self {
            Self::K8 => K8_MAX_AWARD,
            Self::High => HIGH_MAX_AWARD,
        }
    }

    /// Human-readable grade range.
    pub const fn label(self) -> &'static str {
        match self {
            Self::K8 => "K-8",
            Self::High => "9-12",
        }
    }
}

impl fmt::Display for GradeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// --- AwardAmounts ---

/// Estimated award per grade band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AwardAmounts {
    pub k8: Usd,
    pub high: Usd,
}

impl AwardAmounts {
    /// Scale each band's maximum by `award_ratio`, rounded to the cent.
    pub fn from_ratio(award_ratio: f64) -> Self {
        Self {
            k8: Usd::from_dollars_saturating(GradeBand::K8.max_award() * award_ratio),
            high: Usd::from_dollars_saturating(GradeBand::High.max_award() * award_ratio),
        }
    }

    pub fn get(&self, band: GradeBand) -> Usd {
        match band {
            GradeBand::K8 => self.k8,
            GradeBand::High => self.high,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (GradeBand, Usd)> + '_ {
        GradeBand::ALL.into_iter().map(move |band| (band, self.get(band)))
    }
}

// --- AwardInput ---

/// Validated estimator input.
///
/// Only obtainable through [`AwardInput::new`] or [`AwardInput::parse`]
/// (see [`crate::validation`]), so holding one means `agi` is positive and
/// finite and `household_size` is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AwardInput {
    pub(crate) agi: f64,
    pub(crate) household_size: u32,
}

impl AwardInput {
    /// Adjusted gross income, in dollars.
    pub fn agi(&self) -> f64 {
        self.agi
    }

    /// Number of people in the household.
    pub fn household_size(&self) -> u32 {
        self.household_size
    }
}

// --- AwardBreakdown ---

/// Every intermediate value of one estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AwardBreakdown {
    pub input: AwardInput,
    /// Household poverty threshold the income is divided by.
    pub fpl_denominator: f64,
    pub fpl_ratio: f64,
    pub award_ratio: f64,
    pub amounts: AwardAmounts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_display_groups_thousands() {
        assert_eq!(Usd::from_cents(616_600).to_string(), "$6,166.00");
        assert_eq!(Usd::from_cents(61_660).to_string(), "$616.60");
        assert_eq!(Usd::from_cents(5).to_string(), "$0.05");
        assert_eq!(Usd::ZERO.to_string(), "$0.00");
        assert_eq!(Usd::from_cents(123_456_789_01).to_string(), "$123,456,789.01");
        assert_eq!(Usd::from_cents(100_000).to_string(), "$1,000.00");
    }

    #[test]
    fn usd_from_dollars_rounds_to_cent() {
        assert_eq!(Usd::from_dollars(616.6).unwrap().cents(), 61_660);
        assert_eq!(Usd::from_dollars(2733.1715).unwrap().cents(), 273_317);
        assert_eq!(Usd::from_dollars(0.005).unwrap().cents(), 1);
        assert_eq!(Usd::from_dollars(0.0).unwrap(), Usd::ZERO);
    }

    #[test]
    fn usd_from_dollars_rejects_bad_values() {
        assert_eq!(Usd::from_dollars(-0.01), Err(AmountError::Negative(-0.01)));
        assert_eq!(Usd::from_dollars(f64::NAN), Err(AmountError::NonFinite));
        assert_eq!(Usd::from_dollars(f64::INFINITY), Err(AmountError::NonFinite));
        assert!(matches!(Usd::from_dollars(1e30), Err(AmountError::Overflow(_))));
    }

    #[test]
    fn usd_saturating_conversion() {
        assert_eq!(Usd::from_dollars_saturating(f64::NAN), Usd::ZERO);
        assert_eq!(Usd::from_dollars_saturating(-5.0), Usd::ZERO);
        assert_eq!(Usd::from_dollars_saturating(1e30).cents(), u64::MAX);
        assert_eq!(Usd::from_dollars_saturating(840.8).cents(), 84_080);
    }

    #[test]
    fn usd_as_dollars() {
        assert_eq!(Usd::from_cents(61_660).as_dollars(), 616.6);
        assert_eq!(f64::from(Usd::from_cents(840_800)), 8408.0);
    }

    #[test]
    fn usd_serializes_as_dollars() {
        let json = serde_json::to_string(&Usd::from_cents(61_660)).unwrap();
        assert_eq!(json, "616.6");
        let back: Usd = serde_json::from_str("616.6").unwrap();
        assert_eq!(back.cents(), 61_660);
        assert!(serde_json::from_str::<Usd>("-1.0").is_err());
    }

    #[test]
    fn amounts_from_full_ratio() {
        let amounts = AwardAmounts::from_ratio(1.0);
        assert_eq!(amounts.k8.cents(), 616_600);
        assert_eq!(amounts.high.cents(), 840_800);
    }

    #[test]
    fn amounts_from_floor_ratio() {
        let amounts = AwardAmounts::from_ratio(0.1);
        assert_eq!(amounts.k8.cents(), 61_660);
        assert_eq!(amounts.high.cents(), 84_080);
    }

    #[test]
    fn amounts_json_shape() {
        let amounts = AwardAmounts::from_ratio(1.0);
        let value = serde_json::to_value(amounts).unwrap();
        assert_eq!(value, serde_json::json!({ "k8": 6166.0, "high": 8408.0 }));
    }

    #[test]
    fn amounts_iter_in_band_order() {
        let amounts = AwardAmounts::from_ratio(1.0);
        let bands: Vec<_> = amounts.iter().map(|(band, _)| band).collect();
        assert_eq!(bands, vec![GradeBand::K8, GradeBand::High]);
        assert_eq!(amounts.get(GradeBand::High), amounts.high);
    }

    #[test]
    fn grade_band_labels() {
        assert_eq!(GradeBand::K8.to_string(), "K-8");
        assert_eq!(GradeBand::High.to_string(), "9-12");
        assert_eq!(serde_json::to_string(&GradeBand::K8).unwrap(), "\"k8\"");
    }
}
