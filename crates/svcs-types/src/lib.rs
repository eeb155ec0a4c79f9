//! Foundation types for SVCS, a minimal local snapshot-based version control
//! tool.
//!
//! Every other SVCS crate depends on `svcs-types`.
//!
//! # Key Types
//!
//! - [`Fingerprint`] -- 128-bit digest of the tracked content, names snapshots
//! - [`TrackedPath`] -- Project-relative path registered in the index
//! - [`CommitRecord`] -- One entry of the commit ledger

pub mod error;
pub mod fingerprint;
pub mod path;
pub mod record;

pub use error::TypeError;
pub use fingerprint::{Fingerprint, FINGERPRINT_LEN};
pub use path::{normalize_relative, TrackedPath};
pub use record::CommitRecord;
