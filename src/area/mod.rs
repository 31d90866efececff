//! Land-area module
//!
//! Handles unit conversion, totalling of crop-production areas, and boundary
//! validation of caller-supplied units and amounts.

pub mod converter;
pub mod units;
pub mod validate;

pub use converter::{aggregate, convert, AreaValue};
pub use units::{hectares_per_unit, Unit, ACRES_PER_HECTARE};
pub use validate::{checked_aggregate, checked_convert, parse_unit, AreaError, AreaResult};
