//! Land-area conversion and aggregation
//!
//! Pure functions for converting a measured area between units and for
//! totalling the crop-production areas of a farm in a single target unit.
//!
//! Both functions assume pre-validated input (finite, non-negative amounts);
//! the checks live in [`crate::area::validate`] so callers holding raw form
//! data go through the boundary while internal callers pay nothing.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::units::{hectares_per_unit, Unit};

/// A single measured land area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaValue {
    pub amount: f64,
    pub unit: Unit,
}

impl AreaValue {
    pub fn new(amount: f64, unit: Unit) -> Self {
        Self { amount, unit }
    }
}

impl fmt::Display for AreaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}

/// Round to 2 decimal places (half away from zero)
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert an area amount between units
///
/// Identity conversions return `amount` untouched; all others go through the
/// hectare factor table and are rounded to 2 decimal places. The rounding is
/// part of the contract: these values feed display totals, and callers that
/// need full precision must not use this function.
pub fn convert(amount: f64, from: Unit, to: Unit) -> f64 {
    if from == to {
        return amount;
    }
    round2(amount * hectares_per_unit(from) / hectares_per_unit(to))
}

/// Total a set of area entries in the target unit
///
/// Each entry is converted individually (carrying the per-entry rounding of
/// [`convert`]) and added to a running sum. The sum itself is not rounded
/// again. An empty slice totals to exactly 0.
pub fn aggregate(entries: &[AreaValue], target: Unit) -> f64 {
    entries
        .iter()
        .fold(0.0, |total, entry| total + convert(entry.amount, entry.unit, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_conversion_is_exact() {
        for amount in [0.0, 0.001, 1.0, 2.47105, 123.456789, 1e9] {
            assert_eq!(convert(amount, Unit::Hectares, Unit::Hectares), amount);
            assert_eq!(convert(amount, Unit::Acres, Unit::Acres), amount);
        }
    }

    #[test]
    fn test_hectares_to_acres() {
        assert_eq!(convert(1.0, Unit::Hectares, Unit::Acres), 2.47);
        assert_eq!(convert(3.0, Unit::Hectares, Unit::Acres), 7.41);
    }

    #[test]
    fn test_acres_to_hectares() {
        // 10 / 2.47105 = 4.0468..., rounds to 4.05
        assert_eq!(convert(10.0, Unit::Acres, Unit::Hectares), 4.05);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        for amount in [0.5, 1.0, 7.3, 42.0, 150.25] {
            let there = convert(amount, Unit::Hectares, Unit::Acres);
            let back = convert(there, Unit::Acres, Unit::Hectares);
            assert!(
                (back - amount).abs() <= 0.01,
                "round trip of {} drifted to {}",
                amount,
                back
            );
        }
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(aggregate(&[], Unit::Hectares), 0.0);
        assert_eq!(aggregate(&[], Unit::Acres), 0.0);
    }

    #[test]
    fn test_aggregate_same_unit_is_plain_sum() {
        let entries = [
            AreaValue::new(5.0, Unit::Hectares),
            AreaValue::new(5.0, Unit::Hectares),
        ];
        assert_eq!(aggregate(&entries, Unit::Hectares), 10.0);
    }

    #[test]
    fn test_aggregate_mixed_units() {
        // 1 ha + 2.47 acres = 1 + 0.9996... which rounds per entry to 1.0
        let entries = [
            AreaValue::new(1.0, Unit::Hectares),
            AreaValue::new(2.47, Unit::Acres),
        ];
        let total = aggregate(&entries, Unit::Hectares);
        assert!((total - 2.0).abs() <= 0.01, "got {}", total);
    }

    #[test]
    fn test_aggregate_order_independent() {
        let entries = [
            AreaValue::new(3.2, Unit::Acres),
            AreaValue::new(1.0, Unit::Hectares),
            AreaValue::new(0.75, Unit::Acres),
        ];
        let reversed: Vec<AreaValue> = entries.iter().rev().copied().collect();
        let a = aggregate(&entries, Unit::Acres);
        let b = aggregate(&reversed, Unit::Acres);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_area_value_display() {
        let v = AreaValue::new(12.34, Unit::Hectares);
        assert_eq!(v.to_string(), "12.34 hectares");
    }
}
