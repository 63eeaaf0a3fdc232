//! Portfolio Data Model
//!
//! Wire types shared by the API server, the native client and the terminal
//! views. Field names match the JSON the dashboard consumes.

use serde::{Deserialize, Serialize};

/// A tracked investment instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique identifier (ticker symbol for the seeded data)
    pub id: String,
    /// Display name
    pub name: String,
    /// Current price, currency unspecified
    pub price: f64,
    /// Free-form sector label
    pub sector: String,
}

impl Asset {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        sector: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            sector: sector.into(),
        }
    }
}

/// A historical buy/sell event as exposed over the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
}

/// An asset together with its transaction history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDetails {
    #[serde(flatten)]
    pub asset: Asset,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// Health endpoint payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub assets: usize,
}

/// `Price: $10`
pub fn price_line(price: f64) -> String {
    format!("Price: ${}", price)
}

/// `2024-01-01 - buy - $5`
pub fn transaction_line(tx: &Transaction) -> String {
    format!("{} - {} - ${}", tx.date, tx.kind, tx.amount)
}
