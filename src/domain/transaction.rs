//! Domain model for a single financial transaction record.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Amounted, Displayable, Identifiable};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One financial event: identifier, calendar date, signed amount,
/// category tag, free-text description, and counterparty name.
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub kind: TransactionKind,
    #[serde(default)]
    pub description: String,
    pub merchant: String,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        amount: f64,
        kind: TransactionKind,
        merchant: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            amount,
            kind,
            description: String::new(),
            merchant: merchant.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_debit(&self) -> bool {
        self.kind == TransactionKind::Debit
    }

    pub fn is_credit(&self) -> bool {
        self.kind == TransactionKind::Credit
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("txn:{} [{}]", self.id, self.kind)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
/// Category tag for a transaction. The tag set is open: `debit` and
/// `credit` are the named variants, any other tag survives verbatim
/// in `Other`.
pub enum TransactionKind {
    Debit,
    Credit,
    Other(String),
}

impl TransactionKind {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionKind::Debit => "debit",
            TransactionKind::Credit => "credit",
            TransactionKind::Other(tag) => tag,
        }
    }
}

impl From<String> for TransactionKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "debit" => TransactionKind::Debit,
            "credit" => TransactionKind::Credit,
            _ => TransactionKind::Other(tag),
        }
    }
}

impl From<&str> for TransactionKind {
    fn from(tag: &str) -> Self {
        TransactionKind::from(tag.to_owned())
    }
}

impl From<TransactionKind> for String {
    fn from(kind: TransactionKind) -> Self {
        kind.as_str().to_owned()
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
