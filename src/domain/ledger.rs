//! The transaction ledger: an append-only sequence of records with
//! derived queries and aggregates.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::common::{KindDominance, MonthKey};
use crate::domain::transaction::{Transaction, TransactionKind};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// Owns transaction records in insertion order. The record vector is
/// private: the only mutation path is [`TransactionLedger::append`],
/// and every query is a fresh read-only view over the sequence.
pub struct TransactionLedger {
    #[serde(default)]
    transactions: Vec<Transaction>,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from an initial batch, preserving batch order.
    pub fn from_records(records: Vec<Transaction>) -> Self {
        Self {
            transactions: records,
        }
    }

    /// Appends one record to the end of the sequence. Ids are not
    /// checked here; loaders that want uniqueness enforce it before
    /// records reach the ledger.
    pub fn append(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Full sequence in insertion order.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Distinct category tags in first-occurrence order.
    pub fn unique_kinds(&self) -> Vec<TransactionKind> {
        let mut kinds: Vec<TransactionKind> = Vec::new();
        for txn in &self.transactions {
            if !kinds.contains(&txn.kind) {
                kinds.push(txn.kind.clone());
            }
        }
        kinds
    }

    /// Sum of all amounts; 0.0 for an empty ledger.
    pub fn total_amount(&self) -> f64 {
        self.transactions.iter().map(|txn| txn.amount).sum()
    }

    /// Sum of amounts restricted to records matching every provided
    /// date component; omitted components are wildcards.
    pub fn total_amount_by_date(
        &self,
        year: Option<i32>,
        month: Option<u32>,
        day: Option<u32>,
    ) -> f64 {
        self.transactions
            .iter()
            .filter(|txn| {
                year.map_or(true, |y| txn.date.year() == y)
                    && month.map_or(true, |m| txn.date.month() == m)
                    && day.map_or(true, |d| txn.date.day() == d)
            })
            .map(|txn| txn.amount)
            .sum()
    }

    /// Records with an exact tag match, insertion order preserved.
    pub fn by_kind(&self, kind: &TransactionKind) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| txn.kind == *kind)
            .collect()
    }

    /// Records with `start <= date <= end`. An inverted range yields
    /// an empty result rather than an error.
    pub fn in_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| txn.date >= start && txn.date <= end)
            .collect()
    }

    /// Exact-match filter on the counterparty name.
    pub fn by_merchant(&self, merchant: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| txn.merchant == merchant)
            .collect()
    }

    /// Mean amount; 0.0 for an empty ledger.
    pub fn average_amount(&self) -> f64 {
        if self.transactions.is_empty() {
            return 0.0;
        }
        self.total_amount() / self.transactions.len() as f64
    }

    /// Records with `min <= amount <= max`, inclusive both ends.
    pub fn by_amount_range(&self, min: f64, max: f64) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| txn.amount >= min && txn.amount <= max)
            .collect()
    }

    /// Sum of amounts over debit records.
    pub fn total_debit_amount(&self) -> f64 {
        self.total_amount_for(&TransactionKind::Debit)
    }

    /// Sum of amounts over records with the given tag.
    pub fn total_amount_for(&self, kind: &TransactionKind) -> f64 {
        self.transactions
            .iter()
            .filter(|txn| txn.kind == *kind)
            .map(|txn| txn.amount)
            .sum()
    }

    /// Calendar month with the most records, or `None` when the
    /// ledger is empty. Ties go to the month encountered first.
    pub fn busiest_month(&self) -> Option<MonthKey> {
        busiest(self.transactions.iter().map(|txn| txn.date))
    }

    /// Calendar month with the most debit records.
    pub fn busiest_debit_month(&self) -> Option<MonthKey> {
        busiest(
            self.transactions
                .iter()
                .filter(|txn| txn.is_debit())
                .map(|txn| txn.date),
        )
    }

    /// Compares debit and credit record counts. `Equal` covers the
    /// tie case, including an empty ledger.
    pub fn dominant_kind(&self) -> KindDominance {
        let debits = self.by_kind(&TransactionKind::Debit).len();
        let credits = self.by_kind(&TransactionKind::Credit).len();
        match debits.cmp(&credits) {
            std::cmp::Ordering::Greater => KindDominance::Debit,
            std::cmp::Ordering::Less => KindDominance::Credit,
            std::cmp::Ordering::Equal => KindDominance::Equal,
        }
    }

    /// Records dated strictly before `cutoff`.
    pub fn before_date(&self, cutoff: NaiveDate) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| txn.date < cutoff)
            .collect()
    }

    /// First record with a matching id, or `None`. Duplicate ids are
    /// tolerated; the earliest appended record wins.
    pub fn find_by_id(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    /// Description of every record in insertion order, empty strings
    /// included verbatim.
    pub fn descriptions(&self) -> Vec<&str> {
        self.transactions
            .iter()
            .map(|txn| txn.description.as_str())
            .collect()
    }
}

/// Counts dates per calendar month in first-occurrence order, then
/// scans for the highest count. Replacement only on a strictly greater
/// count keeps the first-encountered month on ties.
fn busiest(dates: impl Iterator<Item = NaiveDate>) -> Option<MonthKey> {
    let mut counts: Vec<(MonthKey, usize)> = Vec::new();
    for date in dates {
        let key = MonthKey::of(date);
        match counts.iter_mut().find(|(month, _)| *month == key) {
            Some((_, count)) => *count += 1,
            None => counts.push((key, 1)),
        }
    }

    let mut best: Option<(MonthKey, usize)> = None;
    for (month, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((month, count)),
        }
    }
    best.map(|(month, _)| month)
}
