pub mod common;
pub mod ledger;
pub mod transaction;

pub use common::{Amounted, Displayable, Identifiable, KindDominance, MonthKey};
pub use ledger::TransactionLedger;
pub use transaction::{Transaction, TransactionKind};
