//! Valuation Scoring Engine
//!
//! Wraps the pre-trained regression model behind an opaque scoring
//! boundary: one 247-length feature vector in, one price out.

mod engine;

pub use engine::{ScoringEngine, ScoringResult, Valuation};

use thiserror::Error;

/// Errors during scoring
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Model not loaded")]
    ModelNotLoaded,
    #[error("Model load failed: {0}")]
    ModelLoadError(String),
    #[error("Invalid input shape: expected {expected}, got {actual}")]
    InvalidInputShape { expected: usize, actual: usize },
}
