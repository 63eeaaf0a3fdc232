//! Portfolio Data Types
//!
//! Shapes returned by the portfolio API, plus the display helpers the
//! components share.

use serde::Deserialize;

/// A tracked investment instrument
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub sector: String,
}

impl Asset {
    /// Route of the asset's detail page
    pub fn href(&self) -> String {
        format!("/asset/{}", self.id)
    }

    /// Price line on a dashboard card: `Current Price: $10`
    pub fn card_price_line(&self) -> String {
        format!("Current Price: {}", dollars(self.price))
    }

    /// Price line on the detail page: `Price: $10`
    pub fn price_line(&self) -> String {
        format!("Price: {}", dollars(self.price))
    }

    /// `Sector: Tech`
    pub fn sector_line(&self) -> String {
        format!("Sector: {}", self.sector)
    }
}

/// A historical buy/sell event
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
}

impl Transaction {
    /// `2024-01-01 - buy - $5`
    pub fn line(&self) -> String {
        format!("{} - {} - ${}", self.date, self.kind, self.amount)
    }
}

/// An asset with its transaction history, in server order
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssetDetails {
    #[serde(flatten)]
    pub asset: Asset,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// Input of the portfolio graph
#[derive(Debug, Clone, PartialEq)]
pub struct GraphPoint {
    pub name: String,
    pub value: f64,
}

/// Project the portfolio onto (name, price) pairs
pub fn graph_points(portfolio: &[Asset]) -> Vec<GraphPoint> {
    portfolio
        .iter()
        .map(|asset| GraphPoint {
            name: asset.name.clone(),
            value: asset.price,
        })
        .collect()
}

/// `$10`, `$182.52`
pub fn dollars(value: f64) -> String {
    format!("${}", value)
}
