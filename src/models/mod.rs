//! Data models
//!
//! Rust structs for the farm backend's wire entities.

mod crop_production;
mod crop_type;
mod farm;

pub use crop_production::CropProduction;
pub use crop_type::{crop_type_name, CropType};
pub use farm::{Farm, FarmCreate};
