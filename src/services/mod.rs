pub mod query_service;
pub mod report_service;

pub use query_service::QueryService;
pub use report_service::{LedgerSummary, ReportService};

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Transaction not found: {0}")]
    NotFound(String),
}
