//! Fingerprinting of the tracked file set.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use svcs_types::{Fingerprint, TrackedPath};
use tracing::debug;

use crate::hasher::FingerprintHasher;

/// Errors from fingerprint computation.
#[derive(Debug, thiserror::Error)]
pub enum FingerprintError {
    /// A tracked file could not be opened or read.
    #[error("tracked file unavailable: {path}: {source}")]
    FileUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Fingerprint the current on-disk content of `entries`, in order.
///
/// Every file is streamed into one accumulator; a path listed twice is hashed
/// twice. Directory entries carry no bytes and are skipped. Any unreadable
/// file aborts the whole computation.
pub fn fingerprint<'a, I>(root: &Path, entries: I) -> Result<Fingerprint, FingerprintError>
where
    I: IntoIterator<Item = &'a TrackedPath>,
{
    let mut hasher = FingerprintHasher::new();
    let mut files = 0usize;
    let mut bytes = 0u64;

    for entry in entries.into_iter().filter(|e| !e.is_dir) {
        let unavailable = |source| FingerprintError::FileUnavailable {
            path: entry.path.clone(),
            source,
        };
        let file = File::open(entry.resolve(root)).map_err(unavailable)?;
        bytes += hasher.update_reader(BufReader::new(file)).map_err(unavailable)?;
        files += 1;
    }

    let fp = hasher.finalize();
    debug!(files, bytes, fingerprint = %fp.short_hex(), "fingerprint computed");
    Ok(fp)
}
