//! Store error types
//!
//! Errors raised while loading portfolio data from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the portfolio store
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O operation failed
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `portfolio.toml` is malformed
    #[error("Invalid portfolio file {path:?}: {error}")]
    Toml { path: PathBuf, error: String },

    /// `transactions.csv` is malformed
    #[error("Invalid transaction ledger: {0}")]
    Csv(#[from] csv::Error),

    /// Two assets share an identifier
    #[error("Duplicate asset id: {0}")]
    DuplicateAsset(String),

    /// An asset price is NaN, infinite or negative
    #[error("Asset {asset_id} has an invalid {field}: {value}")]
    InvalidAssetNumber {
        asset_id: String,
        field: &'static str,
        value: f64,
    },

    /// A ledger row carries a NaN or infinite number
    #[error("Transaction on line {line} has an invalid {field}: {value}")]
    InvalidLedgerNumber {
        line: u64,
        field: &'static str,
        value: f64,
    },

    /// A ledger row references an asset that is not in the portfolio
    #[error("Transaction on line {line} references unknown asset: {asset_id}")]
    UnknownAsset { line: u64, asset_id: String },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
