//! Error types for the award estimator.
use thiserror::Error;

/// Which user-supplied field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Agi,
    HouseholdSize,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Agi => f.write_str("adjusted gross income"),
            Self::HouseholdSize => f.write_str("household size"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    #[error("{field} is not a number: {value:?}")] NotANumber { field: Field, value: String },
    #[error("{field} must be a finite number")] NonFinite { field: Field },
    #[error("adjusted gross income must be positive, got {0}")] NonPositiveIncome(f64),
    #[error("household size must be a whole number, got {0}")] FractionalHouseholdSize(f64),
    #[error("household size must be at least 1, got {0}")] HouseholdSizeTooSmall(f64),
    #[error("household size must be at most {max}, got {got}")] HouseholdSizeTooLarge { got: f64, max: u32 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AmountError {
    #[error("amount must be finite")] NonFinite,
    #[error("amount must not be negative, got {0}")] Negative(f64),
    #[error("amount too large: {0}")] Overflow(f64),
}

impl InvalidInputError {
    /// The field this error refers to.
    pub fn field(&self) -> Field {
        match self {
            Self::NotANumber { field, .. } | Self::NonFinite { field } => *field,
            Self::NonPositiveIncome(_) => Field::Agi,
            Self::FractionalHouseholdSize(_)
            | Self::HouseholdSizeTooSmall(_)
            | Self::HouseholdSizeTooLarge { .. } => Field::HouseholdSize,
        }
    }
}
