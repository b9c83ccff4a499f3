//! Validation Error Types

use thiserror::Error;

/// A single validation violation.
///
/// Violations are accumulated into a batch, never raised individually;
/// the `Display` strings are the exact messages surfaced to clients.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Required field absent or blank
    #[error("Missing {0}")]
    MissingField(&'static str),

    /// Value present but not parseable as a number
    #[error("{0} must be a valid number")]
    InvalidNumber(&'static str),

    /// Parsed value outside the global range for its field
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Parsed value outside a district-specific range
    #[error("{field} for {district} must be between {min} and {max}")]
    DistrictOutOfRange {
        field: &'static str,
        district: String,
        value: f64,
        min: f64,
        max: f64,
    },
}
