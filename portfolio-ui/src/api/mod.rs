//! API Client Module
//!
//! HTTP client for the portfolio REST API.

pub mod client;

pub use client::{ApiClient, ApiConfig, ApiError};
