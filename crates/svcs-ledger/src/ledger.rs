//! The in-memory commit ledger.

use serde::{Deserialize, Serialize};
use svcs_types::{CommitRecord, Fingerprint};

/// Append-only, totally ordered list of accepted commits, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    commits: Vec<CommitRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Fingerprint of the most recently appended record.
    pub fn latest_fingerprint(&self) -> Option<Fingerprint> {
        self.commits.last().map(|c| c.hash)
    }

    /// The most recently appended record.
    pub fn latest(&self) -> Option<&CommitRecord> {
        self.commits.last()
    }

    /// Add a record at the end of the history.
    pub fn append(&mut self, record: CommitRecord) {
        self.commits.push(record);
    }

    /// Every record, oldest first.
    pub fn all(&self) -> &[CommitRecord] {
        &self.commits
    }

    /// Every record, newest first.
    pub fn newest_first(&self) -> impl Iterator<Item = &CommitRecord> {
        self.commits.iter().rev()
    }

    /// Most recent record carrying `fingerprint`.
    pub fn find(&self, fingerprint: &Fingerprint) -> Option<&CommitRecord> {
        self.commits.iter().rev().find(|c| c.hash == *fingerprint)
    }
}
