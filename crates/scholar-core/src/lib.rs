//! # scholar-core
//! Foundation types and traits for the scholarship award estimator.

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
pub mod validation;
