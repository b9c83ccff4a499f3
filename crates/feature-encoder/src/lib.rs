//! Feature Encoding Engine
//!
//! Builds the fixed 247-dimension feature vector the valuation model was
//! trained against: 4 numeric slots, a 24-way district one-hot, and a
//! 219-way town hash-bucket one-hot.

mod encoder;
mod hashing;

pub use encoder::{FeatureEncoder, FeatureVector};
pub use hashing::town_bucket;

use property_record::DISTRICT_COUNT;
use thiserror::Error;

/// Number of raw numeric feature slots
pub const NUMERIC_DIMENSION: usize = 4;

/// Number of town hash buckets
pub const TOWN_BUCKETS: usize = 219;

/// Total feature vector dimension (247 as per the training contract)
pub const FEATURE_DIMENSION: usize = NUMERIC_DIMENSION + DISTRICT_COUNT + TOWN_BUCKETS;

/// Errors during feature encoding
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    /// Required key absent or blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Numeric field present but not parseable
    #[error("{0} must be a valid number")]
    InvalidNumber(&'static str),

    /// Assembled vector length breached the contract; a programming
    /// error in the constant tables, never bad input
    #[error("Feature count mismatch: {actual} features created, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}
