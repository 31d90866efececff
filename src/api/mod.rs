//! API module
//!
//! HTTP access to the farm backend and the geocoding service.

pub mod client;
pub mod geocoding;

pub use client::{ApiClient, ApiError, ApiResult, DEFAULT_BASE_URL};
pub use geocoding::{geocode_address, GeocodedAddress};
