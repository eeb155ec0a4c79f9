use serde::{Deserialize, Serialize};

use crate::fingerprint::Fingerprint;

/// One accepted commit in the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Fingerprint naming the commit's snapshot.
    pub hash: Fingerprint,
    /// Username at commit time; empty when none was configured.
    #[serde(default)]
    pub author: String,
    /// Commit message.
    pub message: String,
}

impl CommitRecord {
    pub fn new(hash: Fingerprint, author: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            hash,
            author: author.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_matches_log_file() {
        let record = CommitRecord::new(Fingerprint::from_digest([0; 16]), "alice", "first");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["hash"], "0".repeat(32));
        assert_eq!(value["author"], "alice");
        assert_eq!(value["message"], "first");
    }

    #[test]
    fn missing_author_defaults_to_empty() {
        let json = format!(r#"{{"hash":"{}","message":"m"}}"#, "1".repeat(32));
        let record: CommitRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.author, "");
    }
}
