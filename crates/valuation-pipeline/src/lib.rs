//! Property Valuation Pipeline
//!
//! Composes the validator, feature encoder, and scoring engine into one
//! request-scoped flow: availability check, exhaustive validation,
//! deterministic encoding, scoring, and rounding to 2 decimal places.
//! The components share no mutable state; each invocation is independent.

use feature_encoder::{EncodeError, FeatureEncoder};
use property_record::PropertyRecord;
use record_validator::{ValidationError, Validator};
use scoring_engine::{ScoringEngine, ScoringError};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors surfaced by the pipeline to its caller
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Scoring collaborator not ready; reported before validation runs
    #[error("Model not loaded")]
    ModelUnavailable,

    /// One or more validation violations; the complete list in one batch
    #[error("Validation failed")]
    ValidationFailed { details: Vec<ValidationError> },

    /// Record passed validation but could not be encoded
    #[error("Feature preparation failed: {0}")]
    FeaturePreparation(#[from] EncodeError),

    /// Scoring collaborator failure
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// Successful valuation, price rounded to 2 decimal places
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationResponse {
    pub predicted_price: f64,
}

/// The request-scoped valuation pipeline
pub struct ValuationPipeline {
    validator: Validator,
    encoder: FeatureEncoder,
    engine: ScoringEngine,
}

impl ValuationPipeline {
    /// Create a pipeline with default validation config around an engine
    pub fn new(engine: ScoringEngine) -> Self {
        Self {
            validator: Validator::default(),
            encoder: FeatureEncoder::new(),
            engine,
        }
    }

    /// Create a pipeline with an explicit validator
    pub fn with_validator(validator: Validator, engine: ScoringEngine) -> Self {
        Self {
            validator,
            encoder: FeatureEncoder::new(),
            engine,
        }
    }

    /// Appraise one property record.
    ///
    /// No retries anywhere: the flow is deterministic, so retrying with
    /// the same input yields the same result.
    pub async fn appraise(&self, record: &PropertyRecord) -> Result<ValuationResponse, PipelineError> {
        if !self.engine.is_loaded() {
            return Err(PipelineError::ModelUnavailable);
        }

        let violations = self.validator.validate(record);
        if !violations.is_empty() {
            warn!("Record rejected with {} violation(s)", violations.len());
            return Err(PipelineError::ValidationFailed {
                details: violations,
            });
        }

        let features = self.encoder.encode(record)?;
        let result = self.engine.predict(&features).await?;

        let predicted_price = round2(result.valuation.predicted_price);
        debug!(
            "Appraised record in {}ms: {}",
            result.latency_ms, predicted_price
        );

        Ok(ValuationResponse { predicted_price })
    }
}

/// Round half away from zero to 2 decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use property_record::FieldValue;

    fn valid_record() -> PropertyRecord {
        PropertyRecord {
            baths: Some(FieldValue::Number(2.0)),
            land_size: Some(FieldValue::Number(10.0)),
            beds: Some(FieldValue::Number(3.0)),
            house_size: Some(FieldValue::Number(1500.0)),
            district: Some("Colombo".to_string()),
            town: Some("Nugegoda".to_string()),
        }
    }

    fn pipeline() -> ValuationPipeline {
        ValuationPipeline::new(ScoringEngine::mock())
    }

    #[tokio::test]
    async fn test_valid_record_yields_rounded_price() {
        let response = pipeline().appraise(&valid_record()).await.unwrap();
        assert!(response.predicted_price > 0.0);
        // Rounded to 2 decimal places
        let scaled = response.predicted_price * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_unloaded_model_reported_before_validation() {
        let engine = ScoringEngine::new("model/predictor_02.bin").unwrap();
        let pipeline = ValuationPipeline::new(engine);

        // Even an obviously invalid record gets the availability error.
        let err = pipeline.appraise(&PropertyRecord::default()).await.unwrap_err();
        assert!(matches!(err, PipelineError::ModelUnavailable));
    }

    #[tokio::test]
    async fn test_invalid_record_returns_complete_batch() {
        let mut record = valid_record();
        record.baths = Some(FieldValue::from("abc"));
        record.land_size = Some(FieldValue::Number(2000.0));

        let err = pipeline().appraise(&record).await.unwrap_err();
        match err {
            PipelineError::ValidationFailed { details } => {
                let messages: Vec<String> = details.iter().map(|e| e.to_string()).collect();
                assert_eq!(
                    messages,
                    vec![
                        "Baths must be a valid number",
                        "Land_size must be between 1 and 1000",
                        "Land_size for Colombo must be between 2 and 1000",
                    ]
                );
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_district_override_rejects_end_to_end() {
        let mut record = valid_record();
        record.district = Some("Mullativu".to_string());
        record.town = Some("X".to_string());
        record.house_size = Some(FieldValue::Number(400.0));

        let err = pipeline().appraise(&record).await.unwrap_err();
        match err {
            PipelineError::ValidationFailed { details } => {
                assert!(details.iter().any(|e| e.to_string()
                    == "House_size for Mullativu must be between 500 and 5000"));
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_json_boundary_with_mixed_scalars() {
        let record: PropertyRecord = serde_json::from_str(
            r#"{"Baths": "2", "Land_size": 10, "Beds": "3", "House_size": "1500",
                "district": "Colombo", "town": "  Nugegoda  "}"#,
        )
        .unwrap();

        let pipeline = pipeline();
        let from_json = pipeline.appraise(&record).await.unwrap();
        let from_typed = pipeline.appraise(&valid_record()).await.unwrap();

        // Whitespace and string/number representation do not change the price.
        assert_eq!(from_json, from_typed);
    }

    #[tokio::test]
    async fn test_appraisal_is_deterministic() {
        let pipeline = pipeline();
        let record = valid_record();
        let a = pipeline.appraise(&record).await.unwrap();
        let b = pipeline.appraise(&record).await.unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1234.567), 1234.57);
        assert_eq!(round2(1234.0), 1234.0);
        assert_eq!(round2(0.005), 0.01);
    }
}
