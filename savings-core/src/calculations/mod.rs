//! Savings calculations for the sales-call automation calculator.
//!
//! This module derives time and money saved from the calculator inputs.
//! Everything here is pure arithmetic over [`rust_decimal::Decimal`].

pub mod common;
pub mod estimator;

pub use estimator::{
    SavingsEstimate, SavingsEstimator, SavingsEstimatorConfig, SavingsEstimatorError,
};
