//! # Portfolio Tracker
//!
//! Read-only investment portfolio viewer. This crate holds the native side:
//! the REST API the dashboard consumes, a typed client for it, and
//! terminal renditions of the dashboard pages. The web dashboard itself
//! lives in the `portfolio-ui` crate.
//!
//! ## Modules
//!
//! - [`model`]: Asset, Transaction and AssetDetails wire types
//! - [`store`]: File-backed, in-memory portfolio data
//! - [`api`]: REST API server with Axum
//! - [`client`]: HTTP client for the REST API
//! - [`view`]: Plain-text dashboard and detail views
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: `tracing` subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use portfolio_tracker::client::{ClientConfig, PortfolioClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PortfolioClient::new(ClientConfig::default())?;
//!     for asset in client.fetch_portfolio().await? {
//!         println!("{} ${}", asset.name, asset.price);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use api::{build_router, serve, ApiError, AppState};
pub use client::{ClientConfig, ClientError, PortfolioClient};
pub use config::{Config, ConfigError, DataConfig, LoggingConfig, ServerConfig};
pub use model::{Asset, AssetDetails, HealthStatus, Transaction};
pub use store::{PortfolioStore, StoreError};
