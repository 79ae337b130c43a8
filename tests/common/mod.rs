#![allow(dead_code)]

use chrono::NaiveDate;
use ledger_core::{Transaction, TransactionKind, TransactionLedger};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Three-record ledger used across the suites: two debits and one
/// credit, all in May 2024.
pub fn scenario_ledger() -> TransactionLedger {
    TransactionLedger::from_records(vec![
        Transaction::new(
            "T001",
            date(2024, 5, 10),
            120.5,
            TransactionKind::Debit,
            "SuperMart",
        )
        .with_description("Grocery shopping"),
        Transaction::new(
            "T002",
            date(2024, 5, 11),
            80.0,
            TransactionKind::Credit,
            "CompanyX",
        )
        .with_description("Salary"),
        Transaction::new(
            "T003",
            date(2024, 5, 15),
            45.0,
            TransactionKind::Debit,
            "FuelPlus",
        )
        .with_description("Gas station"),
    ])
}

/// The scenario ledger in the loader's wire format.
pub const SCENARIO_JSON: &str = r#"[
    {
        "transaction_id": "T001",
        "transaction_date": "2024-05-10",
        "transaction_amount": 120.5,
        "transaction_type": "debit",
        "transaction_description": "Grocery shopping",
        "merchant_name": "SuperMart"
    },
    {
        "transaction_id": "T002",
        "transaction_date": "2024-05-11",
        "transaction_amount": 80,
        "transaction_type": "credit",
        "transaction_description": "Salary",
        "merchant_name": "CompanyX"
    },
    {
        "transaction_id": "T003",
        "transaction_date": "2024-05-15",
        "transaction_amount": "45",
        "transaction_type": "debit",
        "transaction_description": "Gas station",
        "merchant_name": "FuelPlus"
    }
]"#;
