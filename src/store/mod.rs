//! Portfolio Store
//!
//! Read-only, in-memory portfolio data served by the API:
//!
//! - **ledger**: CSV transaction log reader
//! - **error**: Error types
//!
//! A data directory contains:
//!
//! ```text
//! portfolio.toml      # alerts = [...] and ordered [[assets]] tables
//! transactions.csv    # optional: Date,Asset ID,Type,Quantity,Price
//! ```
//!
//! The store is loaded once at startup and shared behind an `Arc`; it is
//! never mutated afterwards.

pub mod error;
pub mod ledger;

pub use error::{StoreError, StoreResult};
pub use ledger::{read_ledger, LedgerEntry};

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::model::{Asset, AssetDetails};

/// Name of the portfolio file inside a data directory
pub const PORTFOLIO_FILE: &str = "portfolio.toml";

/// Name of the transaction ledger inside a data directory
pub const LEDGER_FILE: &str = "transactions.csv";

#[derive(Debug, Deserialize)]
struct PortfolioFile {
    #[serde(default)]
    alerts: Vec<String>,
    #[serde(default)]
    assets: Vec<Asset>,
}

/// In-memory portfolio snapshot
#[derive(Debug, Clone, Default)]
pub struct PortfolioStore {
    assets: Vec<Asset>,
    alerts: Vec<String>,
    ledger: HashMap<String, Vec<LedgerEntry>>,
}

impl PortfolioStore {
    /// Build a store from already-parsed parts.
    ///
    /// Rejects duplicate asset ids, ledger rows for unknown assets, and
    /// numbers JSON cannot carry (NaN, infinities) or negative prices.
    pub fn from_parts(
        assets: Vec<Asset>,
        alerts: Vec<String>,
        entries: Vec<LedgerEntry>,
    ) -> StoreResult<Self> {
        let mut ids = HashSet::new();
        for asset in &assets {
            if !ids.insert(asset.id.as_str()) {
                return Err(StoreError::DuplicateAsset(asset.id.clone()));
            }
            if !asset.price.is_finite() || asset.price < 0.0 {
                return Err(StoreError::InvalidAssetNumber {
                    asset_id: asset.id.clone(),
                    field: "price",
                    value: asset.price,
                });
            }
        }

        let mut ledger: HashMap<String, Vec<LedgerEntry>> = HashMap::new();
        for entry in entries {
            for (field, value) in [("quantity", entry.quantity), ("price", entry.price)] {
                if !value.is_finite() {
                    return Err(StoreError::InvalidLedgerNumber {
                        line: entry.line,
                        field,
                        value,
                    });
                }
            }
            if !ids.contains(entry.asset_id.as_str()) {
                return Err(StoreError::UnknownAsset {
                    line: entry.line,
                    asset_id: entry.asset_id,
                });
            }
            ledger.entry(entry.asset_id.clone()).or_default().push(entry);
        }

        Ok(Self {
            assets,
            alerts,
            ledger,
        })
    }

    /// Load a store from a data directory
    pub fn load(data_dir: impl AsRef<Path>) -> StoreResult<Self> {
        let data_dir = data_dir.as_ref();

        let portfolio_path = data_dir.join(PORTFOLIO_FILE);
        let content = std::fs::read_to_string(&portfolio_path).map_err(|source| StoreError::Io {
            path: portfolio_path.clone(),
            source,
        })?;
        let file: PortfolioFile = toml::from_str(&content).map_err(|e| StoreError::Toml {
            path: portfolio_path.clone(),
            error: e.to_string(),
        })?;

        let ledger_path = data_dir.join(LEDGER_FILE);
        let entries = if ledger_path.exists() {
            let reader = std::fs::File::open(&ledger_path).map_err(|source| StoreError::Io {
                path: ledger_path.clone(),
                source,
            })?;
            read_ledger(reader)?
        } else {
            tracing::debug!("No ledger at {:?}, assets have no transactions", ledger_path);
            Vec::new()
        };

        let store = Self::from_parts(file.assets, file.alerts, entries)?;
        tracing::info!(
            assets = store.asset_count(),
            alerts = store.alerts.len(),
            "Loaded portfolio from {:?}",
            data_dir
        );
        Ok(store)
    }

    /// Built-in demo portfolio
    pub fn seeded() -> StoreResult<Self> {
        let assets = vec![
            Asset::new("AAPL", "Apple Inc.", 189.84, "Technology"),
            Asset::new("MSFT", "Microsoft Corporation", 415.5, "Technology"),
            Asset::new("GOOGL", "Alphabet Inc.", 171.95, "Communication Services"),
            Asset::new("AMZN", "Amazon.com, Inc.", 183.32, "Consumer Discretionary"),
            Asset::new("TSLA", "Tesla, Inc.", 177.48, "Consumer Discretionary"),
        ];

        let alerts = vec![
            "TSLA volatility is above its 30-day average".to_string(),
            "Technology holdings exceed 40% of the portfolio".to_string(),
        ];

        let rows = [
            ("2024-01-02", "AAPL", "buy", 10.0, 185.64),
            ("2024-01-15", "MSFT", "buy", 4.0, 388.47),
            ("2024-02-01", "AAPL", "sell", 3.0, 186.86),
            ("2024-02-20", "GOOGL", "buy", 8.0, 141.12),
            ("2024-03-05", "TSLA", "buy", 6.0, 180.74),
            ("2024-04-10", "AMZN", "buy", 5.0, 185.95),
        ];
        let entries = rows
            .iter()
            .enumerate()
            .map(|(i, (date, asset_id, kind, quantity, price))| LedgerEntry {
                date: date.to_string(),
                asset_id: asset_id.to_string(),
                kind: kind.to_string(),
                quantity: *quantity,
                price: *price,
                line: i as u64 + 2,
            })
            .collect();

        Self::from_parts(assets, alerts, entries)
    }

    /// All assets in portfolio order
    pub fn portfolio(&self) -> &[Asset] {
        &self.assets
    }

    /// Risk alert messages in file order
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Number of assets held
    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    /// An asset with its transactions in ledger order
    pub fn asset_details(&self, id: &str) -> Option<AssetDetails> {
        let asset = self.assets.iter().find(|a| a.id == id)?;
        let transactions = self
            .ledger
            .get(id)
            .map(|entries| entries.iter().map(LedgerEntry::to_transaction).collect())
            .unwrap_or_default();

        Some(AssetDetails {
            asset: asset.clone(),
            transactions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const PORTFOLIO_TOML: &str = r#"
alerts = ["Rebalance due"]

[[assets]]
id = "2"
name = "Beta"
price = 20.5
sector = "Energy"

[[assets]]
id = "1"
name = "ACME"
price = 10
sector = "Tech"
"#;

    fn entry(asset_id: &str, date: &str, line: u64) -> LedgerEntry {
        LedgerEntry {
            date: date.to_string(),
            asset_id: asset_id.to_string(),
            kind: "buy".to_string(),
            quantity: 1.0,
            price: 1.0,
            line,
        }
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(PORTFOLIO_FILE), PORTFOLIO_TOML).unwrap();
        std::fs::write(
            dir.path().join(LEDGER_FILE),
            "Date,Asset ID,Type,Quantity,Price\n2024-01-01,1,buy,5,10\n2024-01-03,1,sell,2,11\n",
        )
        .unwrap();

        let store = PortfolioStore::load(dir.path()).unwrap();

        let ids: Vec<_> = store.portfolio().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(store.alerts(), ["Rebalance due".to_string()]);

        let details = store.asset_details("1").unwrap();
        assert_eq!(details.asset.name, "ACME");
        assert_eq!(details.transactions.len(), 2);
        assert_eq!(details.transactions[0].date, "2024-01-01");
        assert_eq!(details.transactions[1].kind, "sell");
        assert_eq!(details.transactions[1].amount, 2.0);
    }

    #[test]
    fn test_load_without_ledger() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(PORTFOLIO_FILE), PORTFOLIO_TOML).unwrap();

        let store = PortfolioStore::load(dir.path()).unwrap();
        assert!(store.asset_details("2").unwrap().transactions.is_empty());
    }

    #[test]
    fn test_load_missing_portfolio() {
        let dir = tempdir().unwrap();
        let err = PortfolioStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_portfolio() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(PORTFOLIO_FILE), "[[assets]]\nid = 1\n").unwrap();
        let err = PortfolioStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::Toml { .. }));
    }

    #[test]
    fn test_duplicate_asset_rejected() {
        let assets = vec![
            Asset::new("1", "ACME", 10.0, "Tech"),
            Asset::new("1", "ACME again", 11.0, "Tech"),
        ];
        let err = PortfolioStore::from_parts(assets, vec![], vec![]).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateAsset(id) if id == "1"));
    }

    #[test]
    fn test_unknown_asset_in_ledger_rejected() {
        let assets = vec![Asset::new("1", "ACME", 10.0, "Tech")];
        let err = PortfolioStore::from_parts(assets, vec![], vec![entry("9", "2024-01-01", 4)])
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownAsset { line: 4, .. }));
    }

    #[test]
    fn test_transactions_grouped_per_asset() {
        let assets = vec![
            Asset::new("1", "ACME", 10.0, "Tech"),
            Asset::new("2", "Beta", 20.0, "Energy"),
        ];
        let entries = vec![
            entry("1", "2024-01-01", 2),
            entry("2", "2024-01-02", 3),
            entry("1", "2024-01-03", 4),
        ];
        let store = PortfolioStore::from_parts(assets, vec![], entries).unwrap();

        let dates: Vec<_> = store
            .asset_details("1")
            .unwrap()
            .transactions
            .into_iter()
            .map(|t| t.date)
            .collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-03"]);
        assert!(store.asset_details("3").is_none());
    }

    #[test]
    fn test_non_finite_price_rejected() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(PORTFOLIO_FILE),
            "[[assets]]\nid = \"1\"\nname = \"ACME\"\nprice = nan\nsector = \"Tech\"\n",
        )
        .unwrap();

        let err = PortfolioStore::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidAssetNumber { ref asset_id, field: "price", .. } if asset_id == "1"
        ));
    }

    #[test]
    fn test_infinite_and_negative_prices_rejected() {
        for price in [f64::INFINITY, f64::NEG_INFINITY, -0.01] {
            let assets = vec![Asset::new("1", "ACME", price, "Tech")];
            let err = PortfolioStore::from_parts(assets, vec![], vec![]).unwrap_err();
            assert!(
                matches!(err, StoreError::InvalidAssetNumber { field: "price", .. }),
                "price {} accepted",
                price
            );
        }

        let free = vec![Asset::new("1", "Gift", 0.0, "Misc")];
        assert!(PortfolioStore::from_parts(free, vec![], vec![]).is_ok());
    }

    #[test]
    fn test_non_finite_ledger_quantity_rejected() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(PORTFOLIO_FILE), PORTFOLIO_TOML).unwrap();
        std::fs::write(
            dir.path().join(LEDGER_FILE),
            "Date,Asset ID,Type,Quantity,Price\n2024-01-01,1,buy,inf,-3\n",
        )
        .unwrap();

        let err = PortfolioStore::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidLedgerNumber { line: 2, field: "quantity", .. }
        ));
    }

    #[test]
    fn test_non_finite_ledger_price_rejected() {
        let assets = vec![Asset::new("1", "ACME", 10.0, "Tech")];
        let mut row = entry("1", "2024-01-01", 7);
        row.price = f64::NAN;

        let err = PortfolioStore::from_parts(assets, vec![], vec![row]).unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidLedgerNumber { line: 7, field: "price", .. }
        ));
    }

    #[test]
    fn test_seeded_store() {
        let store = PortfolioStore::seeded().unwrap();
        assert_eq!(store.asset_count(), 5);
        assert_eq!(store.portfolio()[0].id, "AAPL");
        assert_eq!(store.asset_details("AAPL").unwrap().transactions.len(), 2);
        assert!(!store.alerts().is_empty());
    }
}
