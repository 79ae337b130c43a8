//! Aggregation helpers producing scalar and composite reports.

use serde::{Deserialize, Serialize};

use crate::domain::common::{KindDominance, MonthKey};
use crate::domain::ledger::TransactionLedger;
use crate::domain::transaction::TransactionKind;

/// Aggregates ledger data for reporting scenarios.
pub struct ReportService;

impl ReportService {
    /// Sum of all amounts.
    pub fn total_amount(ledger: &TransactionLedger) -> f64 {
        ledger.total_amount()
    }

    /// Sum of amounts matching the provided date components; omitted
    /// components are wildcards.
    pub fn total_amount_by_date(
        ledger: &TransactionLedger,
        year: Option<i32>,
        month: Option<u32>,
        day: Option<u32>,
    ) -> f64 {
        ledger.total_amount_by_date(year, month, day)
    }

    /// Mean amount, 0.0 for an empty ledger.
    pub fn average_amount(ledger: &TransactionLedger) -> f64 {
        ledger.average_amount()
    }

    /// Sum of amounts over debit records.
    pub fn total_debit_amount(ledger: &TransactionLedger) -> f64 {
        ledger.total_debit_amount()
    }

    /// Month with the highest record count, `None` when empty.
    pub fn busiest_month(ledger: &TransactionLedger) -> Option<MonthKey> {
        ledger.busiest_month()
    }

    /// Month with the highest debit record count.
    pub fn busiest_debit_month(ledger: &TransactionLedger) -> Option<MonthKey> {
        ledger.busiest_debit_month()
    }

    /// Whether debit or credit records dominate by count.
    pub fn dominant_kind(ledger: &TransactionLedger) -> KindDominance {
        ledger.dominant_kind()
    }

    /// Builds the composite activity summary for the whole ledger.
    pub fn summarize(ledger: &TransactionLedger) -> LedgerSummary {
        let summary = LedgerSummary {
            transaction_count: ledger.len(),
            total_amount: ledger.total_amount(),
            average_amount: ledger.average_amount(),
            debit_total: ledger.total_amount_for(&TransactionKind::Debit),
            credit_total: ledger.total_amount_for(&TransactionKind::Credit),
            dominant_kind: ledger.dominant_kind(),
            busiest_month: ledger.busiest_month(),
        };
        tracing::debug!(
            count = summary.transaction_count,
            total = summary.total_amount,
            "ledger summary computed"
        );
        summary
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Whole-ledger activity totals for rendering a report in one pass.
pub struct LedgerSummary {
    pub transaction_count: usize,
    pub total_amount: f64,
    pub average_amount: f64,
    pub debit_total: f64,
    pub credit_total: f64,
    pub dominant_kind: KindDominance,
    pub busiest_month: Option<MonthKey>,
}
