//! Restoring tracked files from a snapshot.
//!
//! Checkout is scoped to the files tracked *now*: entries present in the
//! snapshot but absent from the current index are never restored, and
//! directories are never removed.
//!
//! The restore runs in three phases so a failure cannot leave a file deleted
//! without its replacement:
//!
//! 1. resolve every tracked path inside the snapshot (missing → error),
//! 2. copy every replacement into a staging directory under the control dir,
//! 3. rename each staged file over its working-tree path.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use svcs_index::Index;
use svcs_store::SnapshotStore;
use svcs_types::{Fingerprint, TrackedPath};
use tracing::{debug, info};

use crate::error::{SdkError, SdkResult};

/// Result of a successful checkout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutOutcome {
    pub fingerprint: Fingerprint,
    /// Restored paths, in index order, each listed once.
    pub restored: Vec<String>,
}

/// Replaces tracked working files with a snapshot's content.
pub struct CheckoutEngine<'a> {
    snapshots: &'a SnapshotStore,
}

impl<'a> CheckoutEngine<'a> {
    pub fn new(snapshots: &'a SnapshotStore) -> Self {
        Self { snapshots }
    }

    /// Check out the snapshot named by `hash`.
    ///
    /// An id that is not a well-formed fingerprint, or names no snapshot,
    /// is reported as [`SdkError::CommitNotFound`] without touching any file.
    pub fn run(&self, index: &Index, hash: &str) -> SdkResult<CheckoutOutcome> {
        let fingerprint = hash
            .trim()
            .parse::<Fingerprint>()
            .map_err(|_| SdkError::CommitNotFound(hash.to_string()))?;
        if !self.snapshots.exists(&fingerprint) {
            return Err(SdkError::CommitNotFound(hash.to_string()));
        }

        let mut seen = HashSet::new();
        let sources = index
            .list()
            .iter()
            .filter(|entry| seen.insert(entry.path.as_str()))
            .map(|entry| -> SdkResult<(&TrackedPath, PathBuf)> {
                Ok((entry, self.snapshots.file_path(&fingerprint, &entry.path)?))
            })
            .collect::<SdkResult<Vec<_>>>()?;

        let layout = self.snapshots.layout();
        let staging = tempfile::Builder::new()
            .prefix(".checkout-")
            .tempdir_in(layout.control_dir())?;

        let mut staged = Vec::with_capacity(sources.len());
        for (n, (entry, src)) in sources.into_iter().enumerate() {
            let tmp = staging.path().join(n.to_string());
            fs::copy(&src, &tmp)?;
            staged.push((entry, tmp));
        }

        let mut restored = Vec::with_capacity(staged.len());
        for (entry, tmp) in staged {
            let dst = entry.resolve(layout.root());
            if let Some(parent) = dst.parent() {
                fs::create_dir_all(parent)?;
            }
            if let Err(e) = fs::rename(&tmp, &dst) {
                debug!(path = %entry.path, error = %e, "rename failed; copying instead");
                fs::copy(&tmp, &dst)?;
            }
            debug!(path = %entry.path, "restored");
            restored.push(entry.path.clone());
        }

        info!(fingerprint = %fingerprint.short_hex(), files = restored.len(), "checkout complete");
        Ok(CheckoutOutcome {
            fingerprint,
            restored,
        })
    }
}
