//! Crop type model
//!
//! Reference data served by the backend's crop-types endpoint.

use serde::{Deserialize, Serialize};

/// A crop type known to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropType {
    pub id: String,
    pub name: String,
}

/// Resolve a crop type id to its display name
///
/// Crop productions carry numeric ids while the reference records use string
/// ids, so the lookup compares textually. Missing ids resolve to "Unknown".
pub fn crop_type_name(crop_types: &[CropType], crop_type_id: i64) -> String {
    let id = crop_type_id.to_string();
    crop_types
        .iter()
        .find(|ct| ct.id == id)
        .map(|ct| ct.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CropType> {
        vec![
            CropType { id: "1".to_string(), name: "Wheat".to_string() },
            CropType { id: "2".to_string(), name: "Soybeans".to_string() },
        ]
    }

    #[test]
    fn test_crop_type_name_found() {
        assert_eq!(crop_type_name(&sample(), 2), "Soybeans");
    }

    #[test]
    fn test_crop_type_name_missing() {
        assert_eq!(crop_type_name(&sample(), 99), "Unknown");
        assert_eq!(crop_type_name(&[], 1), "Unknown");
    }
}
