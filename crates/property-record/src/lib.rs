//! Property Record Data Model
//!
//! Shared record type and feature contract constants for the valuation pipeline.

mod record;

pub use record::{FieldValue, NumericField, PropertyRecord};

/// Number of known administrative districts
pub const DISTRICT_COUNT: usize = 24;

/// Fixed district list, alphabetically stable.
///
/// Position i in this list corresponds to feature index 4 + i. The ordering
/// is a contract with the trained model artifact, not configuration.
pub const DISTRICTS: [&str; DISTRICT_COUNT] = [
    "Ampara",
    "Anuradhapura",
    "Badulla",
    "Batticaloa",
    "Colombo",
    "Galle",
    "Gampaha",
    "Hambantota",
    "Jaffna",
    "Kalutara",
    "Kandy",
    "Kegalle",
    "Kurunegala",
    "Mannar",
    "Matale",
    "Matara",
    "Monaragala",
    "Mullativu",
    "Nuwara Eliya",
    "Polonnaruwa",
    "Puttalam",
    "Ratnapura",
    "Trincomalee",
    "Vavuniya",
];

/// Position of a district name in the contract list, if known
pub fn district_index(district: &str) -> Option<usize> {
    DISTRICTS.iter().position(|d| *d == district)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_district_list_is_contract_sized() {
        assert_eq!(DISTRICTS.len(), DISTRICT_COUNT);
    }

    #[test]
    fn test_district_index_exact_match() {
        assert_eq!(district_index("Colombo"), Some(4));
        assert_eq!(district_index("Vavuniya"), Some(23));
        // Case-sensitive by contract
        assert_eq!(district_index("colombo"), None);
        assert_eq!(district_index("Colombo "), None);
    }
}
