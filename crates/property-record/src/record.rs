//! Record Types and Field Access

use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw field value as it arrives at the input boundary.
///
/// Numeric fields are loosely typed on the wire: a JSON number or a string
/// containing a number are both accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Already-numeric value
    Number(f64),
    /// Textual value, possibly numeric
    Text(String),
}

impl FieldValue {
    /// Whether the value is empty or whitespace-only text
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Number(_) => false,
            FieldValue::Text(t) => t.trim().is_empty(),
        }
    }

    /// Parse the value as a floating-point number.
    ///
    /// Surrounding whitespace is tolerated; anything not convertible
    /// yields `None` rather than a panic.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(t) => t.trim().parse::<f64>().ok(),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// The four numeric fields, in their canonical declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericField {
    Baths,
    LandSize,
    Beds,
    HouseSize,
}

impl NumericField {
    /// Declaration order used for validation passes and vector slots 0-3
    pub const ALL: [NumericField; 4] = [
        NumericField::Baths,
        NumericField::LandSize,
        NumericField::Beds,
        NumericField::HouseSize,
    ];

    /// Wire-format field name, as used in violation messages
    pub fn name(&self) -> &'static str {
        match self {
            NumericField::Baths => "Baths",
            NumericField::LandSize => "Land_size",
            NumericField::Beds => "Beds",
            NumericField::HouseSize => "House_size",
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One residential property record, request-scoped.
///
/// Every field is optional: absence is a typed state handled by the
/// validator and encoder, never a lookup failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    #[serde(rename = "Baths", default, skip_serializing_if = "Option::is_none")]
    pub baths: Option<FieldValue>,
    #[serde(rename = "Land_size", default, skip_serializing_if = "Option::is_none")]
    pub land_size: Option<FieldValue>,
    #[serde(rename = "Beds", default, skip_serializing_if = "Option::is_none")]
    pub beds: Option<FieldValue>,
    #[serde(rename = "House_size", default, skip_serializing_if = "Option::is_none")]
    pub house_size: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,
}

impl PropertyRecord {
    /// Raw value of a numeric field, if present
    pub fn numeric(&self, field: NumericField) -> Option<&FieldValue> {
        match field {
            NumericField::Baths => self.baths.as_ref(),
            NumericField::LandSize => self.land_size.as_ref(),
            NumericField::Beds => self.beds.as_ref(),
            NumericField::HouseSize => self.house_size.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_parsing() {
        assert_eq!(FieldValue::Number(2.0).as_number(), Some(2.0));
        assert_eq!(FieldValue::from("1500").as_number(), Some(1500.0));
        assert_eq!(FieldValue::from("  3.5  ").as_number(), Some(3.5));
        assert_eq!(FieldValue::from("abc").as_number(), None);
        assert_eq!(FieldValue::from("").as_number(), None);
    }

    #[test]
    fn test_blank_detection() {
        assert!(FieldValue::from("").is_blank());
        assert!(FieldValue::from("   ").is_blank());
        assert!(!FieldValue::from("0").is_blank());
        assert!(!FieldValue::Number(0.0).is_blank());
    }

    #[test]
    fn test_deserialize_mixed_scalars() {
        let record: PropertyRecord = serde_json::from_str(
            r#"{"Baths": 2, "Land_size": "10", "Beds": 3, "House_size": 1500.0,
                "district": "Colombo", "town": "Nugegoda"}"#,
        )
        .unwrap();

        assert_eq!(record.baths, Some(FieldValue::Number(2.0)));
        assert_eq!(record.land_size, Some(FieldValue::Text("10".to_string())));
        assert_eq!(record.numeric(NumericField::LandSize).unwrap().as_number(), Some(10.0));
        assert_eq!(record.district.as_deref(), Some("Colombo"));
    }

    #[test]
    fn test_deserialize_missing_keys() {
        let record: PropertyRecord = serde_json::from_str(r#"{"Baths": 2}"#).unwrap();
        assert!(record.land_size.is_none());
        assert!(record.town.is_none());
    }

    #[test]
    fn test_field_declaration_order() {
        let names: Vec<&str> = NumericField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["Baths", "Land_size", "Beds", "House_size"]);
    }
}
