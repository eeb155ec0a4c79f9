//! Tracked-file index for SVCS.
//!
//! Keeps the ordered list of paths the user asked to track and expands it
//! into the directory-aware entry list the snapshot writer materializes.
//!
//! # Key Types
//!
//! - [`Index`] -- The ordered, duplicate-tolerant path list
//! - [`DuplicatePolicy`] -- Whether re-tracking appends or is ignored
//! - [`TrackOutcome`] -- Result of a successful track
//! - [`IndexStore`] -- Loads and saves the index file

pub mod error;
pub mod index;
pub mod store;

pub use error::{IndexError, IndexResult};
pub use index::{DuplicatePolicy, Index, TrackOutcome};
pub use store::IndexStore;
