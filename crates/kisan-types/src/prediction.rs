//! Crop-yield prediction inputs and results.

use serde::{Deserialize, Serialize};

/// States and union territories accepted as the farm location.
pub const INDIAN_STATES: [&str; 36] = [
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Andaman and Nicobar Islands",
    "Chandigarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
    "Lakshadweep",
    "Puducherry",
];

/// Canonical spelling of a state name, matched case-insensitively.
pub fn canonical_state(name: &str) -> Option<&'static str> {
    let name = name.trim();
    INDIAN_STATES
        .iter()
        .copied()
        .find(|s| s.eq_ignore_ascii_case(name))
}

/// Soil nutrients, location, rainfall, and area for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmParameters {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub state: String,
    pub rainfall_mm: f64,
    pub area_hectares: f64,
}

/// Factor scores on a 0-100 scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YieldFactors {
    pub weather: f64,
    pub soil: f64,
    pub irrigation: f64,
}

/// Model-produced yield estimate after coercion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldPrediction {
    /// Tons per hectare.
    pub expected_yield: f64,
    /// 0-100.
    pub confidence: f64,
    pub explanation: String,
    pub recommendations: Vec<String>,
    pub factors: YieldFactors,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_state() {
        assert_eq!(canonical_state("punjab"), Some("Punjab"));
        assert_eq!(canonical_state("  Tamil Nadu "), Some("Tamil Nadu"));
        assert_eq!(canonical_state("Atlantis"), None);
        assert_eq!(canonical_state(""), None);
    }

    #[test]
    fn test_prediction_serializes_camel_case() {
        let value = serde_json::to_value(YieldPrediction {
            expected_yield: 3.5,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(value["expectedYield"], 3.5);
        assert!(value["factors"]["irrigation"].is_number());
    }
}
