use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
    #[error("Duplicate transaction id: {0}")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
