//! Farm list-view logic
//!
//! Pure search, sort, pagination, and crop-count helpers backing the farm
//! list screen. All functions operate on caller-owned data and hold no state.

use serde::{Deserialize, Serialize};

use crate::area::{convert, Unit};
use crate::models::{CropProduction, Farm};

/// Field the farm list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    FarmName,
    LandArea,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Irrigated / non-irrigated entry counts for one farm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CropCounts {
    pub irrigated: usize,
    pub non_irrigated: usize,
}

/// Count irrigated and non-irrigated crop productions
pub fn count_crop_productions(productions: &[CropProduction]) -> CropCounts {
    CropCounts {
        irrigated: productions.iter().filter(|p| p.is_irrigated).count(),
        non_irrigated: productions.iter().filter(|p| !p.is_irrigated).count(),
    }
}

/// Filter farms by a case-insensitive search term over name and address
///
/// An empty term keeps everything.
pub fn filter_farms<'a>(farms: &'a [Farm], search_term: &str) -> Vec<&'a Farm> {
    let term = search_term.trim().to_lowercase();
    farms
        .iter()
        .filter(|farm| {
            if term.is_empty() {
                return true;
            }
            farm.farm_name.to_lowercase().contains(&term)
                || farm
                    .address
                    .as_deref()
                    .is_some_and(|addr| addr.to_lowercase().contains(&term))
        })
        .collect()
}

/// Sort farms in place by the given field and direction
///
/// Land areas are compared in hectares so a 100-acre farm sorts below a
/// 100-hectare one regardless of each record's declared unit.
pub fn sort_farms(farms: &mut [&Farm], field: SortField, direction: SortDirection) {
    farms.sort_by(|a, b| {
        let ordering = match field {
            SortField::FarmName => a.farm_name.to_lowercase().cmp(&b.farm_name.to_lowercase()),
            SortField::LandArea => {
                let a_ha = convert(a.land_area, a.land_unit, Unit::Hectares);
                let b_ha = convert(b.land_area, b.land_unit, Unit::Hectares);
                a_ha.total_cmp(&b_ha)
            }
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Slice out one page of results (pages are 1-based)
pub fn paginate<'a>(farms: &'a [&'a Farm], page: usize, per_page: usize) -> &'a [&'a Farm] {
    if per_page == 0 {
        return &[];
    }
    let start = page.saturating_sub(1) * per_page;
    if start >= farms.len() {
        return &[];
    }
    let end = (start + per_page).min(farms.len());
    &farms[start..end]
}

/// Number of pages needed to show `len` items
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn farm(id: &str, name: &str, area: f64, unit: Unit, address: Option<&str>) -> Farm {
        Farm {
            id: id.to_string(),
            farm_name: name.to_string(),
            land_area: area,
            land_unit: unit,
            address: address.map(str::to_string),
            crop_productions: vec![],
            created_at: None,
        }
    }

    fn sample() -> Vec<Farm> {
        vec![
            farm("1", "Green Valley", 120.0, Unit::Hectares, Some("Uberaba, MG")),
            farm("2", "Hilltop Ranch", 100.0, Unit::Acres, Some("Boise, ID")),
            farm("3", "aurora farms", 50.0, Unit::Hectares, None),
        ]
    }

    #[test]
    fn test_filter_by_name_case_insensitive() {
        let farms = sample();
        let hits = filter_farms(&farms, "AURORA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");
    }

    #[test]
    fn test_filter_by_address() {
        let farms = sample();
        let hits = filter_farms(&farms, "boise");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
    }

    #[test]
    fn test_filter_empty_term_keeps_all() {
        let farms = sample();
        assert_eq!(filter_farms(&farms, "  ").len(), 3);
    }

    #[test]
    fn test_sort_by_name() {
        let farms = sample();
        let mut refs = filter_farms(&farms, "");
        sort_farms(&mut refs, SortField::FarmName, SortDirection::Asc);
        let ids: Vec<&str> = refs.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn test_sort_by_land_area_normalizes_units() {
        // 100 acres is about 40 hectares, so it sorts below both hectare farms
        let farms = sample();
        let mut refs = filter_farms(&farms, "");
        sort_farms(&mut refs, SortField::LandArea, SortDirection::Asc);
        let ids: Vec<&str> = refs.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["2", "3", "1"]);
    }

    #[test]
    fn test_sort_descending() {
        let farms = sample();
        let mut refs = filter_farms(&farms, "");
        sort_farms(&mut refs, SortField::LandArea, SortDirection::Desc);
        assert_eq!(refs[0].id, "1");
    }

    #[test]
    fn test_paginate() {
        let farms = sample();
        let refs = filter_farms(&farms, "");
        assert_eq!(paginate(&refs, 1, 2).len(), 2);
        assert_eq!(paginate(&refs, 2, 2).len(), 1);
        assert!(paginate(&refs, 3, 2).is_empty());
        assert!(paginate(&refs, 1, 0).is_empty());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(6, 0), 0);
    }

    #[test]
    fn test_count_crop_productions() {
        let productions = vec![
            CropProduction {
                id: 1,
                crop_type_id: 1,
                area: 10.0,
                unit: Unit::Hectares,
                is_irrigated: true,
                is_insured: false,
            },
            CropProduction {
                id: 2,
                crop_type_id: 2,
                area: 5.0,
                unit: Unit::Acres,
                is_irrigated: false,
                is_insured: true,
            },
        ];
        let counts = count_crop_productions(&productions);
        assert_eq!(counts.irrigated, 1);
        assert_eq!(counts.non_irrigated, 1);
        assert_eq!(count_crop_productions(&[]), CropCounts::default());
    }
}
