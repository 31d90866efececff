//! farmtrack Library
//!
//! Core functionality for the farm-management client: data models, land-area
//! conversion and aggregation, list-view logic, and the backend REST client.

pub mod api;
pub mod area;
pub mod build_info;
pub mod draft;
pub mod listing;
pub mod models;
