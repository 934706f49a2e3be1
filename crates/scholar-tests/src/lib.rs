//! Integration test suite for the scholarship award estimator.
//!
//! Exercises validation and the award engine together through their public
//! APIs, including the published example households and the formula's
//! ordering, scaling, and floor properties.

pub mod helpers;
