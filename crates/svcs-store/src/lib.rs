//! Snapshot storage for SVCS.
//!
//! This crate owns everything SVCS keeps on disk inside the control
//! directory: the fingerprint-named snapshot trees under `commits/` and the
//! JSON state files read and written by the index, ledger, and config layers.
//!
//! # Design Rules
//!
//! 1. Snapshots are immutable once written.
//! 2. Stage-then-rename: a snapshot becomes visible only when complete.
//! 3. State files are replaced atomically, never edited in place.
//! 4. Malformed state is an error, never silently treated as empty.
//! 5. All I/O errors are propagated.

pub mod error;
pub mod layout;
pub mod snapshot;
pub mod state;

pub use error::{StoreError, StoreResult};
pub use layout::Layout;
pub use snapshot::{SnapshotStore, STAGING_PREFIX};
pub use state::{load_state, save_state};
