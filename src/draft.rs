//! Farm draft
//!
//! Mutable working state for the create/edit farm form: the caller-owned list
//! of crop-production rows plus the farm metadata, with the running area
//! total recomputed fresh from current rows on every query.

use chrono::{SecondsFormat, Utc};
use thiserror::Error;

use crate::area::{aggregate, AreaValue, Unit};
use crate::models::{CropProduction, FarmCreate};

/// Required-field violations on submit
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("farm name is required")]
    MissingFarmName,

    #[error("land area is required")]
    MissingLandArea,
}

/// One crop-production row being edited
///
/// Rows have no id while in the draft; ids are assigned 1..=n on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct CropProductionRow {
    pub crop_type_id: i64,
    pub area: f64,
    pub unit: Unit,
    pub is_irrigated: bool,
    pub is_insured: bool,
}

impl Default for CropProductionRow {
    fn default() -> Self {
        Self {
            crop_type_id: 1,
            area: 0.0,
            unit: Unit::Hectares,
            is_irrigated: false,
            is_insured: false,
        }
    }
}

impl CropProductionRow {
    fn area_value(&self) -> AreaValue {
        AreaValue::new(self.area, self.unit)
    }
}

/// Working state for a farm being created or edited
#[derive(Debug, Clone, Default)]
pub struct FarmDraft {
    pub farm_name: String,
    pub land_area: Option<f64>,
    pub land_unit: Option<Unit>,
    pub address: String,
    pub crop_productions: Vec<CropProductionRow>,
}

impl FarmDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new row with form defaults, returning it for editing
    pub fn add_crop_production(&mut self) -> &mut CropProductionRow {
        self.crop_productions.push(CropProductionRow::default());
        let last = self.crop_productions.len() - 1;
        &mut self.crop_productions[last]
    }

    /// Remove a row; out-of-range indexes are ignored
    pub fn remove_crop_production(&mut self, index: usize) {
        if index < self.crop_productions.len() {
            self.crop_productions.remove(index);
        }
    }

    /// Total area across the current rows, in the target unit
    ///
    /// Computed from scratch on every call; nothing is cached between edits.
    pub fn total_crop_area(&self, target: Unit) -> f64 {
        let entries: Vec<AreaValue> = self
            .crop_productions
            .iter()
            .map(CropProductionRow::area_value)
            .collect();
        aggregate(&entries, target)
    }

    /// Check the required fields
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.farm_name.trim().is_empty() {
            return Err(DraftError::MissingFarmName);
        }
        if self.land_area.is_none() {
            return Err(DraftError::MissingLandArea);
        }
        Ok(())
    }

    /// Turn the draft into a POST body
    ///
    /// Rows are numbered 1..=n and the record is stamped with the current UTC
    /// time, matching what the form submit produces.
    pub fn into_create(self) -> Result<FarmCreate, DraftError> {
        self.validate()?;
        let land_area = self.land_area.unwrap_or_default();
        let crop_productions = self
            .crop_productions
            .into_iter()
            .enumerate()
            .map(|(index, row)| CropProduction {
                id: index as i64 + 1,
                crop_type_id: row.crop_type_id,
                area: row.area,
                unit: row.unit,
                is_irrigated: row.is_irrigated,
                is_insured: row.is_insured,
            })
            .collect();

        let address = self.address.trim();
        Ok(FarmCreate {
            farm_name: self.farm_name.trim().to_string(),
            land_area,
            land_unit: self.land_unit.unwrap_or(Unit::Hectares),
            address: (!address.is_empty()).then(|| address.to_string()),
            crop_productions,
            created_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        })
    }
}
