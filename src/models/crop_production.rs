//! Crop production model
//!
//! One crop grown on a portion of a farm's land, with its own area
//! measurement independent of the farm's total.

use serde::{Deserialize, Serialize};

use crate::area::{AreaValue, Unit};

/// A crop production entry belonging to a farm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropProduction {
    pub id: i64,
    pub crop_type_id: i64,
    pub area: f64,
    pub unit: Unit,
    pub is_irrigated: bool,
    pub is_insured: bool,
}

impl CropProduction {
    /// View this entry's measurement as an area value for aggregation
    pub fn area_value(&self) -> AreaValue {
        AreaValue::new(self.area, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_camel_case() {
        let production = CropProduction {
            id: 1,
            crop_type_id: 2,
            area: 12.5,
            unit: Unit::Hectares,
            is_irrigated: true,
            is_insured: false,
        };
        let json = serde_json::to_value(&production).unwrap();
        assert_eq!(json["cropTypeId"], 2);
        assert_eq!(json["isIrrigated"], true);
        assert_eq!(json["unit"], "hectares");
    }

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "id": 3,
            "cropTypeId": 1,
            "area": 40,
            "unit": "acres",
            "isIrrigated": false,
            "isInsured": true
        }"#;
        let production: CropProduction = serde_json::from_str(json).unwrap();
        assert_eq!(production.unit, Unit::Acres);
        assert_eq!(production.area_value(), AreaValue::new(40.0, Unit::Acres));
    }
}
