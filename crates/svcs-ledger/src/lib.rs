//! Commit ledger for SVCS.
//!
//! The ledger is the append-only history of accepted commits. Each record
//! joins to its snapshot through the fingerprint. Records are never mutated
//! or removed; consumers wanting newest-first order reverse it themselves.

pub mod error;
pub mod ledger;
pub mod store;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
pub use store::LedgerStore;
