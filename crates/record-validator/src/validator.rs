//! Record Validator for Range and Domain Checking

use crate::error::ValidationError;
use property_record::{NumericField, PropertyRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Inclusive validation range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether a value lies inside the range, both ends inclusive.
    /// NaN is outside every range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// District-specific bounds, checked in addition to the global pass.
///
/// Field order here (House_size, then Land_size) fixes the order of
/// district-qualified violations in the output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistrictRules {
    /// House size bounds (sq.ft)
    pub house_size: Range,
    /// Land size bounds (perches)
    pub land_size: Range,
}

impl DistrictRules {
    fn overridden_fields(&self) -> [(NumericField, Range); 2] {
        [
            (NumericField::HouseSize, self.house_size),
            (NumericField::LandSize, self.land_size),
        ]
    }
}

/// Validation configuration: global ranges plus district overrides.
///
/// Built once at startup and never mutated; the defaults mirror the
/// dataset the scoring model was trained on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Baths valid range
    pub baths_range: Range,
    /// Land size valid range (perches)
    pub land_size_range: Range,
    /// Beds valid range
    pub beds_range: Range,
    /// House size valid range (sq.ft)
    pub house_size_range: Range,
    /// Per-district overrides for House_size and Land_size
    pub district_overrides: BTreeMap<String, DistrictRules>,
}

impl ValidationConfig {
    /// Global range for a numeric field
    pub fn global_range(&self, field: NumericField) -> Range {
        match field {
            NumericField::Baths => self.baths_range,
            NumericField::LandSize => self.land_size_range,
            NumericField::Beds => self.beds_range,
            NumericField::HouseSize => self.house_size_range,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        let mut district_overrides = BTreeMap::new();
        district_overrides.insert(
            "Mullativu".to_string(),
            DistrictRules {
                house_size: Range::new(500.0, 5000.0),
                land_size: Range::new(5.0, 500.0),
            },
        );
        district_overrides.insert(
            "Colombo".to_string(),
            DistrictRules {
                house_size: Range::new(800.0, 10000.0),
                land_size: Range::new(2.0, 1000.0),
            },
        );

        Self {
            baths_range: Range::new(1.0, 10.0),
            land_size_range: Range::new(1.0, 1000.0),
            beds_range: Range::new(1.0, 10.0),
            house_size_range: Range::new(1.0, 10000.0),
            district_overrides,
        }
    }
}

/// Validator for property records
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a record against global ranges and district overrides.
    ///
    /// Never short-circuits: every field is checked and every applicable
    /// violation is reported in one pass. An empty result signals success.
    /// Global-field violations come first in field-declaration order,
    /// then district-override violations; a field can appear in both sets.
    pub fn validate(&self, record: &PropertyRecord) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for field in NumericField::ALL {
            self.check_field(record, field, self.config.global_range(field), None, &mut errors);
        }

        // District pass: only for recognized override keys. An unknown
        // district is not an error at this stage.
        if let Some(district) = record.district.as_deref() {
            if let Some(rules) = self.config.district_overrides.get(district) {
                for (field, range) in rules.overridden_fields() {
                    self.check_field(record, field, range, Some(district), &mut errors);
                }
            }
        }

        debug!("Validated record: {} violation(s)", errors.len());
        errors
    }

    fn check_field(
        &self,
        record: &PropertyRecord,
        field: NumericField,
        range: Range,
        district: Option<&str>,
        errors: &mut Vec<ValidationError>,
    ) {
        let value = match record.numeric(field) {
            Some(v) if !v.is_blank() => v,
            _ => {
                errors.push(ValidationError::MissingField(field.name()));
                return;
            }
        };

        let parsed = match value.as_number() {
            Some(n) => n,
            None => {
                errors.push(ValidationError::InvalidNumber(field.name()));
                return;
            }
        };

        if !range.contains(parsed) {
            errors.push(match district {
                Some(d) => ValidationError::DistrictOutOfRange {
                    field: field.name(),
                    district: d.to_string(),
                    value: parsed,
                    min: range.min,
                    max: range.max,
                },
                None => ValidationError::OutOfRange {
                    field: field.name(),
                    value: parsed,
                    min: range.min,
                    max: range.max,
                },
            });
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
