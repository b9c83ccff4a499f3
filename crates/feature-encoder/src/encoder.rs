//! Feature Vector Assembly

use crate::hashing::town_bucket;
use crate::{EncodeError, FEATURE_DIMENSION, NUMERIC_DIMENSION, TOWN_BUCKETS};
use property_record::{NumericField, PropertyRecord, DISTRICTS, DISTRICT_COUNT};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Feature vector for the valuation model.
///
/// Layout: slots 0-3 numerics (Baths, Land_size, Beds, House_size),
/// 4-27 district one-hot, 28-246 town hash-bucket one-hot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Raw feature values (247 dimensions)
    pub values: Vec<f64>,
}

impl FeatureVector {
    /// The four numeric slots
    pub fn numerics(&self) -> &[f64] {
        &self.values[..NUMERIC_DIMENSION]
    }

    /// The 24-slot district one-hot block
    pub fn district_block(&self) -> &[f64] {
        &self.values[NUMERIC_DIMENSION..NUMERIC_DIMENSION + DISTRICT_COUNT]
    }

    /// The 219-slot town hash-bucket block
    pub fn town_block(&self) -> &[f64] {
        &self.values[NUMERIC_DIMENSION + DISTRICT_COUNT..]
    }
}

/// Deterministic encoder from a validated record to a feature vector.
///
/// Pure and stateless; does not re-run range validation, but fails
/// (never panics) on absent or malformed keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureEncoder;

impl FeatureEncoder {
    /// Create a new encoder
    pub fn new() -> Self {
        Self
    }

    /// Encode a record into the 247-dimension feature vector.
    ///
    /// Never returns a partially built vector: any failure aborts the
    /// whole encoding.
    pub fn encode(&self, record: &PropertyRecord) -> Result<FeatureVector, EncodeError> {
        let mut values = Vec::with_capacity(FEATURE_DIMENSION);

        // 1. Numeric features, in declaration order
        for field in NumericField::ALL {
            let raw = match record.numeric(field) {
                Some(v) if !v.is_blank() => v,
                _ => return Err(EncodeError::MissingField(field.name())),
            };
            let parsed = raw
                .as_number()
                .ok_or(EncodeError::InvalidNumber(field.name()))?;
            values.push(parsed);
        }

        // 2. District one-hot (24 slots). An unrecognized district yields
        // an all-zero block rather than an error.
        let district = record
            .district
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .ok_or(EncodeError::MissingField("district"))?;
        for known in DISTRICTS {
            values.push(if known == district { 1.0 } else { 0.0 });
        }

        // 3. Town hash bucket (219 slots)
        let town = record
            .town
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or(EncodeError::MissingField("town"))?;
        let bucket = town_bucket(town);
        let mut town_block = vec![0.0; TOWN_BUCKETS];
        town_block[bucket] = 1.0;
        values.extend(town_block);

        // 4. Contract check
        if values.len() != FEATURE_DIMENSION {
            return Err(EncodeError::DimensionMismatch {
                expected: FEATURE_DIMENSION,
                actual: values.len(),
            });
        }

        debug!("Prepared {} features", values.len());
        Ok(FeatureVector { values })
    }
}
