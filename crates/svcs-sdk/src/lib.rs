//! High-level SDK for SVCS.
//!
//! Ties the index, fingerprint function, snapshot store, and commit ledger
//! together behind [`Repository`]. This is the entry point for the CLI and
//! for anything else embedding SVCS.

pub mod checkout;
pub mod commit;
pub mod config;
pub mod error;
pub mod repository;
pub mod state;

pub use checkout::{CheckoutEngine, CheckoutOutcome};
pub use commit::CommitOutcome;
pub use config::{ConfigOutcome, ConfigStore, RepoOptions, UserConfig};
pub use error::{SdkError, SdkResult};
pub use repository::Repository;
pub use state::ProjectState;

// Re-export key types
pub use svcs_index::{DuplicatePolicy, Index, IndexError, TrackOutcome};
pub use svcs_ledger::Ledger;
pub use svcs_store::{Layout, SnapshotStore, StoreError};
pub use svcs_types::{CommitRecord, Fingerprint, TrackedPath};
