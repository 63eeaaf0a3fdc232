//! Transaction Ledger
//!
//! Reads the CSV transaction log. The file carries a header row
//! `Date,Asset ID,Type,Quantity,Price`; rows are kept in file order.

use serde::Deserialize;
use std::io::Read;

use super::error::StoreResult;
use crate::model::Transaction;

/// One row of the ledger
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LedgerEntry {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Asset ID")]
    pub asset_id: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Quantity")]
    pub quantity: f64,
    /// Price at the time of the transaction
    #[serde(rename = "Price")]
    pub price: f64,
    /// Line in the source file, for error reporting
    #[serde(skip)]
    pub line: u64,
}

impl LedgerEntry {
    /// Wire representation; `amount` is the traded quantity
    pub fn to_transaction(&self) -> Transaction {
        Transaction {
            date: self.date.clone(),
            kind: self.kind.clone(),
            amount: self.quantity,
        }
    }
}

/// Parse a ledger from any reader
pub fn read_ledger<R: Read>(reader: R) -> StoreResult<Vec<LedgerEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut record = csv::StringRecord::new();
    let mut entries = Vec::new();

    while rdr.read_record(&mut record)? {
        let mut entry: LedgerEntry = record.deserialize(Some(&headers))?;
        entry.line = record.position().map(|p| p.line()).unwrap_or_default();
        entries.push(entry);
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_ledger_keeps_order() {
        let csv = "Date,Asset ID,Type,Quantity,Price\n\
                   2024-01-01,AAPL,buy,5,180.5\n\
                   2024-02-01, MSFT ,sell,2,410\n";
        let entries = read_ledger(csv.as_bytes()).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].asset_id, "AAPL");
        assert_eq!(entries[0].line, 2);
        assert_eq!(entries[1].asset_id, "MSFT");
        assert_eq!(entries[1].kind, "sell");
        assert_eq!(entries[1].price, 410.0);
    }

    #[test]
    fn test_to_transaction_uses_quantity() {
        let csv = "Date,Asset ID,Type,Quantity,Price\n2024-01-01,AAPL,buy,5,180.5\n";
        let entries = read_ledger(csv.as_bytes()).unwrap();
        let tx = entries[0].to_transaction();

        assert_eq!(tx.date, "2024-01-01");
        assert_eq!(tx.kind, "buy");
        assert_eq!(tx.amount, 5.0);
    }

    #[test]
    fn test_bad_quantity_rejected() {
        let csv = "Date,Asset ID,Type,Quantity,Price\n2024-01-01,AAPL,buy,lots,1\n";
        assert!(read_ledger(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_header_only() {
        let csv = "Date,Asset ID,Type,Quantity,Price\n";
        assert!(read_ledger(csv.as_bytes()).unwrap().is_empty());
    }
}
