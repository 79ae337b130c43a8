//! Record-returning queries over a ledger.

use chrono::NaiveDate;

use crate::domain::ledger::TransactionLedger;
use crate::domain::transaction::{Transaction, TransactionKind};
use crate::services::{ServiceError, ServiceResult};

/// Stateless filter helpers over a [`TransactionLedger`].
pub struct QueryService;

impl QueryService {
    /// Returns a snapshot of the ledger's records in insertion order.
    pub fn list(ledger: &TransactionLedger) -> Vec<&Transaction> {
        ledger.all().iter().collect()
    }

    /// Records carrying the exact category tag.
    pub fn by_kind<'a>(
        ledger: &'a TransactionLedger,
        kind: &TransactionKind,
    ) -> Vec<&'a Transaction> {
        ledger.by_kind(kind)
    }

    /// Records whose counterparty matches `merchant` exactly.
    pub fn by_merchant<'a>(ledger: &'a TransactionLedger, merchant: &str) -> Vec<&'a Transaction> {
        ledger.by_merchant(merchant)
    }

    /// Records dated within `[start, end]`, inclusive.
    pub fn in_date_range(
        ledger: &TransactionLedger,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<&Transaction> {
        ledger.in_date_range(start, end)
    }

    /// Records with amounts within `[min, max]`, inclusive.
    pub fn by_amount_range(ledger: &TransactionLedger, min: f64, max: f64) -> Vec<&Transaction> {
        ledger.by_amount_range(min, max)
    }

    /// Records dated strictly before `cutoff`.
    pub fn before_date(ledger: &TransactionLedger, cutoff: NaiveDate) -> Vec<&Transaction> {
        ledger.before_date(cutoff)
    }

    /// First record with the given id, if any.
    pub fn find<'a>(ledger: &'a TransactionLedger, id: &str) -> Option<&'a Transaction> {
        ledger.find_by_id(id)
    }

    /// Like [`QueryService::find`], but absence is an error for
    /// callers that treat a missing id as a failure.
    pub fn require<'a>(ledger: &'a TransactionLedger, id: &str) -> ServiceResult<&'a Transaction> {
        ledger
            .find_by_id(id)
            .ok_or_else(|| ServiceError::NotFound(id.to_owned()))
    }

    /// Distinct category tags in first-occurrence order.
    pub fn unique_kinds(ledger: &TransactionLedger) -> Vec<TransactionKind> {
        ledger.unique_kinds()
    }

    /// All record descriptions in insertion order.
    pub fn descriptions(ledger: &TransactionLedger) -> Vec<&str> {
        ledger.descriptions()
    }
}
