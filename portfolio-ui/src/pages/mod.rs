//! Pages
//!
//! Top-level page components for each route.

pub mod asset_details;
pub mod dashboard;

pub use asset_details::AssetDetails;
pub use dashboard::Dashboard;
