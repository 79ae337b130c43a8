//! Validating JSON loader for transaction batches.
//!
//! Accepts a JSON array of records keyed by `transaction_id`,
//! `transaction_date`, `transaction_amount`, `transaction_type`,
//! `transaction_description`, and `merchant_name`. Amounts may arrive
//! as numbers or numeric strings. Validation happens here so
//! malformed records never reach query logic.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::ledger::TransactionLedger;
use crate::domain::transaction::{Transaction, TransactionKind};
use crate::errors::{LedgerError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default)]
/// Boundary policy for a load.
pub struct LoaderOptions {
    /// When set, a repeated `transaction_id` aborts the load with
    /// [`LedgerError::DuplicateId`]. Off by default: ids are advisory
    /// in the core and `append` never checks them.
    pub reject_duplicate_ids: bool,
}

impl LoaderOptions {
    pub fn strict() -> Self {
        Self {
            reject_duplicate_ids: true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawTransaction {
    transaction_id: String,
    transaction_date: String,
    transaction_amount: RawAmount,
    transaction_type: String,
    #[serde(default)]
    transaction_description: String,
    merchant_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

/// Parses a JSON document into validated transaction records.
pub fn parse_batch(json: &str, options: &LoaderOptions) -> Result<Vec<Transaction>> {
    let raw: Vec<RawTransaction> = serde_json::from_str(json)?;
    convert(raw, options)
}

/// Parses a batch from any reader.
pub fn parse_reader<R: Read>(reader: R, options: &LoaderOptions) -> Result<Vec<Transaction>> {
    let raw: Vec<RawTransaction> = serde_json::from_reader(reader)?;
    convert(raw, options)
}

/// Reads a batch file and builds a ledger from it.
pub fn load_from_path(path: &Path, options: &LoaderOptions) -> Result<TransactionLedger> {
    let file = File::open(path)?;
    let records = parse_reader(BufReader::new(file), options)?;
    tracing::info!(path = %path.display(), count = records.len(), "transaction batch loaded");
    Ok(TransactionLedger::from_records(records))
}

fn convert(raw: Vec<RawTransaction>, options: &LoaderOptions) -> Result<Vec<Transaction>> {
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut records = Vec::with_capacity(raw.len());

    for (index, entry) in raw.into_iter().enumerate() {
        let record = validate(index, entry)?;
        if options.reject_duplicate_ids && !seen_ids.insert(record.id.clone()) {
            return Err(LedgerError::DuplicateId(record.id));
        }
        records.push(record);
    }

    tracing::debug!(count = records.len(), "transaction batch validated");
    Ok(records)
}

fn validate(index: usize, raw: RawTransaction) -> Result<Transaction> {
    if raw.transaction_id.is_empty() {
        return Err(invalid(index, "empty transaction_id"));
    }

    let date = NaiveDate::parse_from_str(&raw.transaction_date, DATE_FORMAT).map_err(|_| {
        invalid(
            index,
            format!("malformed transaction_date {:?}", raw.transaction_date),
        )
    })?;

    let amount = match raw.transaction_amount {
        RawAmount::Number(value) => value,
        RawAmount::Text(text) => text.parse::<f64>().map_err(|_| {
            invalid(index, format!("unparseable transaction_amount {text:?}"))
        })?,
    };
    if !amount.is_finite() {
        return Err(invalid(index, "non-finite transaction_amount"));
    }

    Ok(Transaction {
        id: raw.transaction_id,
        date,
        amount,
        kind: TransactionKind::from(raw.transaction_type),
        description: raw.transaction_description,
        merchant: raw.merchant_name,
    })
}

fn invalid(index: usize, reason: impl Into<String>) -> LedgerError {
    LedgerError::InvalidRecord {
        index,
        reason: reason.into(),
    }
}
