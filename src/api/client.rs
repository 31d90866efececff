//! Farm backend REST client
//!
//! Thin typed wrapper over the backend's /farms and /crop-types endpoints.

use thiserror::Error;

use crate::models::{CropType, Farm, FarmCreate};

/// Default backend address when FARMTRACK_API_URL is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("farm not found: {0}")]
    FarmNotFound(String),
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Client for the farm backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    /// Create a client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Create a client from the FARMTRACK_API_URL environment variable
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("FARMTRACK_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check_status(response: reqwest::blocking::Response) -> ApiResult<reqwest::blocking::Response> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: response.url().to_string(),
            });
        }
        Ok(response)
    }

    /// List all farms
    pub fn get_farms(&self) -> ApiResult<Vec<Farm>> {
        let url = self.url("/farms");
        tracing::debug!("GET {}", url);
        let response = Self::check_status(self.http.get(&url).send()?)?;
        Ok(response.json()?)
    }

    /// Fetch a single farm by id
    ///
    /// A 404 maps to [`ApiError::FarmNotFound`] so callers can tell a missing
    /// record apart from a broken backend.
    pub fn get_farm_by_id(&self, id: &str) -> ApiResult<Farm> {
        let url = self.url(&format!("/farms/{}", id));
        tracing::debug!("GET {}", url);
        let response = self.http.get(&url).send()?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::FarmNotFound(id.to_string()));
        }
        Ok(Self::check_status(response)?.json()?)
    }

    /// List the crop type reference records
    pub fn get_crop_types(&self) -> ApiResult<Vec<CropType>> {
        let url = self.url("/crop-types");
        tracing::debug!("GET {}", url);
        let response = Self::check_status(self.http.get(&url).send()?)?;
        Ok(response.json()?)
    }

    /// Create a farm, returning the stored record with its assigned id
    pub fn create_farm(&self, farm: &FarmCreate) -> ApiResult<Farm> {
        let url = self.url("/farms");
        tracing::debug!("POST {}", url);
        let response = Self::check_status(self.http.post(&url).json(farm).send()?)?;
        Ok(response.json()?)
    }

    /// Replace a farm record (full PUT, as the backend expects)
    pub fn update_farm(&self, farm: &Farm) -> ApiResult<Farm> {
        let url = self.url(&format!("/farms/{}", farm.id));
        tracing::debug!("PUT {}", url);
        let response = self.http.put(&url).json(farm).send()?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::FarmNotFound(farm.id.clone()));
        }
        Ok(Self::check_status(response)?.json()?)
    }

    /// Delete a farm by id
    pub fn delete_farm(&self, id: &str) -> ApiResult<()> {
        let url = self.url(&format!("/farms/{}", id));
        tracing::debug!("DELETE {}", url);
        let response = self.http.delete(&url).send()?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::FarmNotFound(id.to_string()));
        }
        Self::check_status(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = ApiClient::new("http://localhost:3001/");
        assert_eq!(client.base_url(), "http://localhost:3001");
        assert_eq!(client.url("/farms"), "http://localhost:3001/farms");
    }
}
