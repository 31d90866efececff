//! Land-area unit types and conversion constants
//!
//! Provides the closed set of supported land-area units and their conversion
//! factors relative to the hectare base unit.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported land-area measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Hectares,
    Acres,
}

impl Unit {
    /// Get the canonical unit string as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Hectares => "hectares",
            Unit::Acres => "acres",
        }
    }

    /// Parse from string, accepting singular and plural forms
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hectares" | "hectare" | "ha" => Some(Unit::Hectares),
            "acres" | "acre" | "ac" => Some(Unit::Acres),
            _ => None,
        }
    }

    /// Display name for form selectors
    pub fn display_name(&self) -> &'static str {
        match self {
            Unit::Hectares => "Hectares",
            Unit::Acres => "Acres",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Area Conversion Constants (to hectares)
// ============================================================================

/// Acres per hectare
pub const ACRES_PER_HECTARE: f64 = 2.47105;

/// Get the conversion factor from a unit to hectares
///
/// Adding a unit means adding one entry here; the converter never branches on
/// specific unit pairs.
pub fn hectares_per_unit(unit: Unit) -> f64 {
    match unit {
        Unit::Hectares => 1.0,
        Unit::Acres => 1.0 / ACRES_PER_HECTARE,
    }
}
