#![doc(test(attr(deny(warnings))))]

//! Ledger Core offers an in-memory transaction ledger with derived
//! queries and aggregates, plus a validating JSON loader for
//! transaction batches.

pub mod domain;
pub mod errors;
pub mod services;
pub mod storage;
pub mod utils;

pub use domain::{
    KindDominance, MonthKey, Transaction, TransactionKind, TransactionLedger,
};
pub use errors::LedgerError;
pub use services::{LedgerSummary, QueryService, ReportService};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ledger Core tracing initialized.");
    });
}
