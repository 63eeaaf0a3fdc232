//! UI Components
//!
//! Stateless Leptos components; all data arrives through props.

pub mod asset_card;
pub mod loading;
pub mod portfolio_graph;
pub mod risk_alerts;
pub mod transaction_list;

pub use asset_card::AssetCard;
pub use loading::{ErrorState, Loading};
pub use portfolio_graph::PortfolioGraph;
pub use risk_alerts::RiskAlerts;
pub use transaction_list::TransactionList;
