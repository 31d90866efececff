//! Address geocoding via Nominatim
//!
//! Resolves a free-text address to coordinates for map display.

use serde::Deserialize;

use super::client::{ApiError, ApiResult};

const NOMINATIM_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

/// A geocoded address
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedAddress {
    pub full_address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One place in a Nominatim search response (coordinates arrive as strings)
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    name: String,
    lat: String,
    lon: String,
}

/// Look up the best match for an address
///
/// Returns `Ok(None)` when Nominatim has no result, or when the result's
/// coordinates fail to parse (logged, since that indicates an upstream
/// format change rather than a bad address).
pub fn geocode_address(address: &str) -> ApiResult<Option<GeocodedAddress>> {
    let http = reqwest::blocking::Client::new();
    let response = http
        .get(NOMINATIM_SEARCH_URL)
        .query(&[("q", address), ("format", "json"), ("limit", "1")])
        // Nominatim's usage policy requires an identifying user agent
        .header(reqwest::header::USER_AGENT, concat!("farmtrack/", env!("CARGO_PKG_VERSION")))
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status,
            url: response.url().to_string(),
        });
    }

    let places: Vec<NominatimPlace> = response.json()?;
    let Some(place) = places.into_iter().next() else {
        return Ok(None);
    };

    match (place.lat.parse::<f64>(), place.lon.parse::<f64>()) {
        (Ok(latitude), Ok(longitude)) => Ok(Some(GeocodedAddress {
            full_address: place.name,
            latitude,
            longitude,
        })),
        _ => {
            tracing::warn!(
                "unparseable coordinates from geocoder: lat={:?} lon={:?}",
                place.lat,
                place.lon
            );
            Ok(None)
        }
    }
}
