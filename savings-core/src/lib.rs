pub mod calculations;
pub mod models;

pub use calculations::{
    SavingsEstimate, SavingsEstimator, SavingsEstimatorConfig, SavingsEstimatorError,
};
pub use models::*;
