//! Portfolio API Client
//!
//! Native HTTP client for the three portfolio endpoints. The base URL is
//! injected through [`ClientConfig`], so tests can point it at a server
//! bound to an ephemeral port.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use crate::model::{Asset, AssetDetails};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Configuration for the portfolio client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the portfolio API (e.g., "http://localhost:5000")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout_ms: 10_000,
        }
    }
}

impl ClientConfig {
    /// Config for `base_url` with the default timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// Portfolio client errors
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("API returned status {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Portfolio REST API client
pub struct PortfolioClient {
    client: Client,
    base_url: String,
}

impl PortfolioClient {
    /// Build a client for the API at `config.base_url`.
    ///
    /// A trailing `/` on the base URL is dropped so request paths join
    /// cleanly. Fails with [`ClientError::Network`] if the underlying HTTP
    /// client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /portfolio
    pub async fn fetch_portfolio(&self) -> Result<Vec<Asset>, ClientError> {
        let response = self.get("/portfolio").await?;
        decode(check_status(response, None)?).await
    }

    /// GET /alerts
    pub async fn fetch_risk_alerts(&self) -> Result<Vec<String>, ClientError> {
        let response = self.get("/alerts").await?;
        decode(check_status(response, None)?).await
    }

    /// GET /asset/{id}
    pub async fn fetch_asset_details(&self, id: &str) -> Result<AssetDetails, ClientError> {
        let path = format!("/asset/{}", urlencoding::encode(id));
        let response = self.get(&path).await?;
        decode(check_status(response, Some(id))?).await
    }

    async fn get(&self, path: &str) -> Result<Response, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout
            } else {
                ClientError::Network(e)
            }
        })
    }
}

fn check_status(response: Response, asset_id: Option<&str>) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match (status, asset_id) {
        (StatusCode::NOT_FOUND, Some(id)) => Err(ClientError::NotFound(id.to_string())),
        _ => Err(ClientError::Status(status.as_u16())),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let bytes = response.bytes().await.map_err(ClientError::Network)?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = PortfolioClient::new(ClientConfig::new("http://localhost:5000/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_BASE);
        assert_eq!(config.timeout_ms, 10_000);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Port 9 (discard) is not expected to run an HTTP server
        let mut config = ClientConfig::new("http://127.0.0.1:9");
        config.timeout_ms = 2_000;
        let client = PortfolioClient::new(config).unwrap();

        let err = client.fetch_portfolio().await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_) | ClientError::Timeout));
    }
}
