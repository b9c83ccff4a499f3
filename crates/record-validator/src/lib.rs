//! Property Record Validation
//!
//! Provides multi-tier range checking for property records: global
//! plausibility ranges plus district-specific overrides, with exhaustive
//! violation accumulation.

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::{DistrictRules, Range, ValidationConfig, Validator};
