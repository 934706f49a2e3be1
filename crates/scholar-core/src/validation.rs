//! Input validation: the boundary between raw user input and the estimator.
//!
//! Raw strings are coerced to numbers, checked against the input constraints,
//! and packaged into an [`AwardInput`]. The estimator only ever sees an
//! `AwardInput`, so it never has to re-check its arguments.

use crate::constants::{FPL_BASE_AMOUNT, FPL_PER_PERSON_AMOUNT, MAX_HOUSEHOLD_SIZE};
use crate::error::{Field, InvalidInputError};
use crate::types::AwardInput;

/// Household poverty threshold for `household_size` people, in dollars.
///
/// `FPL_BASE_AMOUNT + FPL_PER_PERSON_AMOUNT * household_size`.
pub fn fpl_denominator(household_size: u32) -> f64 {
    FPL_BASE_AMOUNT + FPL_PER_PERSON_AMOUNT * f64::from(household_size)
}

/// Coerce a raw field to a number. Surrounding whitespace is ignored.
fn coerce_number(field: Field, raw: &str) -> Result<f64, InvalidInputError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed.parse().map_err(|_| InvalidInputError::NotANumber {
        field,
        value: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(InvalidInputError::NonFinite { field });
    }
    Ok(value)
}

/// Check that an income figure is positive and finite.
pub fn validate_agi(agi: f64) -> Result<f64, InvalidInputError> {
    if !agi.is_finite() {
        return Err(InvalidInputError::NonFinite { field: Field::Agi });
    }
    if agi <= 0.0 {
        return Err(InvalidInputError::NonPositiveIncome(agi));
    }
    Ok(agi)
}

/// Check that a numeric household size is a whole number in
/// `1..=MAX_HOUSEHOLD_SIZE` and convert it.
pub fn validate_household_size(size: f64) -> Result<u32, InvalidInputError> {
    if !size.is_finite() {
        return Err(InvalidInputError::NonFinite {
            field: Field::HouseholdSize,
        });
    }
    if size.fract() != 0.0 {
        return Err(InvalidInputError::FractionalHouseholdSize(size));
    }
    if size < 1.0 {
        return Err(InvalidInputError::HouseholdSizeTooSmall(size));
    }
    if size > f64::from(MAX_HOUSEHOLD_SIZE) {
        return Err(InvalidInputError::HouseholdSizeTooLarge {
            got: size,
            max: MAX_HOUSEHOLD_SIZE,
        });
    }
    Ok(size as u32)
}

/// Parse a raw income string, e.g. `"45000"` or `" 45000.50 "`.
pub fn parse_agi(raw: &str) -> Result<f64, InvalidInputError> {
    validate_agi(coerce_number(Field::Agi, raw)?)
}

/// Parse a raw household size string. Integral floats such as `"2.0"` are
/// accepted; `"2.5"` is not.
pub fn parse_household_size(raw: &str) -> Result<u32, InvalidInputError> {
    validate_household_size(coerce_number(Field::HouseholdSize, raw)?)
}

impl AwardInput {
    /// Validate already-typed values.
    pub fn new(agi: f64, household_size: u32) -> Result<Self, InvalidInputError> {
        let agi = validate_agi(agi)?;
        let household_size = validate_household_size(f64::from(household_size))?;
        Ok(Self {
            agi,
            household_size,
        })
    }

    /// Validate raw strings as collected from a form or command line.
    ///
    /// Income is checked first, so when both fields are bad the income
    /// error is the one reported.
    pub fn parse(agi: &str, household_size: &str) -> Result<Self, InvalidInputError> {
        let agi = parse_agi(agi)?;
        let household_size = parse_household_size(household_size)?;
        Ok(Self {
            agi,
            household_size,
        })
    }
}
