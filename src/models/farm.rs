//! Farm model
//!
//! Represents a farm record with land-area metadata and nested crop
//! productions, in the camelCase wire format the backend serves.

use serde::{Deserialize, Serialize};

use crate::area::{aggregate, AreaValue, Unit};
use super::CropProduction;

/// A farm record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farm {
    pub id: String,
    pub farm_name: String,
    pub land_area: f64,
    pub land_unit: Unit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub crop_productions: Vec<CropProduction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Data for creating a new farm (POST body, backend assigns the id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmCreate {
    pub farm_name: String,
    pub land_area: f64,
    pub land_unit: Unit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub crop_productions: Vec<CropProduction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Farm {
    /// The farm's declared land area as a displayable value
    pub fn land_area_value(&self) -> AreaValue {
        AreaValue::new(self.land_area, self.land_unit)
    }

    /// Total area across all crop productions, in the target unit
    ///
    /// Recomputed fresh on every call; the result is never cached on the
    /// record.
    pub fn total_crop_area(&self, target: Unit) -> f64 {
        let entries: Vec<AreaValue> = self
            .crop_productions
            .iter()
            .map(CropProduction::area_value)
            .collect();
        aggregate(&entries, target)
    }
}
