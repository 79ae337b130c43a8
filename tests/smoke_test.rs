use std::fs;

use ledger_core::storage::{load_from_path, LoaderOptions};
use ledger_core::{init, KindDominance, QueryService, ReportService, TransactionKind};

mod common;

#[test]
fn load_and_query_smoke() {
    init();

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("transaction.json");
    fs::write(&path, common::SCENARIO_JSON).expect("write batch file");

    let ledger = load_from_path(&path, &LoaderOptions::default()).expect("load batch");
    assert_eq!(ledger.len(), 3);

    assert_eq!(ledger.total_amount(), 245.5);
    assert_eq!(ledger.total_debit_amount(), 165.5);
    assert_eq!(ledger.dominant_kind(), KindDominance::Debit);
    assert_eq!(
        ledger.busiest_month().map(|month| month.to_string()),
        Some("2024-05".to_owned())
    );

    let debits = QueryService::by_kind(&ledger, &TransactionKind::Debit);
    assert_eq!(debits.len(), 2);

    let summary = ReportService::summarize(&ledger);
    assert_eq!(summary.transaction_count, 3);
    assert!((summary.debit_total + summary.credit_total - summary.total_amount).abs() < 1e-9);
}

#[test]
fn loaded_ledger_matches_hand_built_ledger() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("transaction.json");
    fs::write(&path, common::SCENARIO_JSON).expect("write batch file");

    let loaded = load_from_path(&path, &LoaderOptions::strict()).expect("load batch");
    let built = common::scenario_ledger();

    assert_eq!(loaded.all(), built.all());
}
