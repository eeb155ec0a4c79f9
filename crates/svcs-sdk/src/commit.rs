use svcs_crypto::fingerprint;
use svcs_store::SnapshotStore;
use svcs_types::{CommitRecord, Fingerprint};
use tracing::{debug, info};

use crate::error::{SdkError, SdkResult};
use crate::state::ProjectState;

/// Result of a commit request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A record was appended to the ledger.
    Committed(CommitRecord),
    /// The tracked content matches the latest commit.
    NothingToCommit(Fingerprint),
}

impl CommitOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }

    pub fn fingerprint(&self) -> Fingerprint {
        match self {
            Self::Committed(record) => record.hash,
            Self::NothingToCommit(fp) => *fp,
        }
    }
}

/// Snapshot the tracked files and append a ledger record if they changed.
///
/// The no-op check compares against the latest ledger entry only. A
/// fingerprint seen earlier in history (content reverted to an older state)
/// is committed again, reusing the existing snapshot directory.
pub(crate) fn commit(
    snapshots: &SnapshotStore,
    state: &mut ProjectState,
    message: &str,
) -> SdkResult<CommitOutcome> {
    if message.is_empty() {
        return Err(SdkError::EmptyMessage);
    }

    let root = snapshots.layout().root();
    let current = fingerprint(root, state.index().list())?;
    if state.ledger().latest_fingerprint() == Some(current) {
        debug!(fingerprint = %current.short_hex(), "nothing to commit");
        return Ok(CommitOutcome::NothingToCommit(current));
    }

    snapshots.write(&current, &state.index().expand_with_directories())?;

    let author = state.config().name.clone();
    let record = CommitRecord::new(current, author, message);
    state.ledger_mut().append(record.clone());

    info!(fingerprint = %current.short_hex(), files = state.index().len(), "changes committed");
    Ok(CommitOutcome::Committed(record))
}
