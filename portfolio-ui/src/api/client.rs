//! HTTP API Client
//!
//! Functions for communicating with the portfolio REST API.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::model::{Asset, AssetDetails};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Client configuration, injected into [`ApiClient::new`]
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    /// The base URL is fixed at build time: `PORTFOLIO_API_URL` when set
    /// during compilation, otherwise [`DEFAULT_API_BASE`].
    fn default() -> Self {
        Self::new(option_env!("PORTFOLIO_API_URL").unwrap_or(DEFAULT_API_BASE))
    }
}

impl ApiConfig {
    /// Config for `base_url`, without any trailing `/`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// Failure of a single API request
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Not found")]
    NotFound,

    #[error("Server returned status {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Portfolio API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    /// Client for the API described by `config`
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Fetch all assets, in server order
    pub async fn fetch_portfolio(&self) -> Result<Vec<Asset>, ApiError> {
        get_json(&self.url("/portfolio")).await
    }

    /// Fetch risk alert messages, in server order
    pub async fn fetch_risk_alerts(&self) -> Result<Vec<String>, ApiError> {
        get_json(&self.url("/alerts")).await
    }

    /// Fetch one asset with its transactions
    pub async fn fetch_asset_details(&self, id: &str) -> Result<AssetDetails, ApiError> {
        get_json(&self.url(&asset_path(id))).await
    }
}

/// `/asset/{id}` with the id percent-encoded as one path segment
fn asset_path(id: &str) -> String {
    let encoded = String::from(js_sys::encode_uri_component(id));
    format!("/asset/{}", encoded)
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check_status(response.status())?;

    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode(&body)
}

/// Map an HTTP status onto the error taxonomy
pub fn check_status(status: u16) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        404 => Err(ApiError::NotFound),
        other => Err(ApiError::Status(other)),
    }
}

/// Decode a JSON response body
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_asset_path_encodes_id() {
        assert_eq!(asset_path("1"), "/asset/1");
        assert_eq!(asset_path("BRK/B"), "/asset/BRK%2FB");
        assert_eq!(asset_path("a b"), "/asset/a%20b");
    }
}
