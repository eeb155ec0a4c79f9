use svcs_types::Fingerprint;

/// Errors from snapshot and state-file operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No snapshot directory exists for the fingerprint.
    #[error("snapshot not found: {0}")]
    SnapshotNotFound(Fingerprint),

    /// The snapshot exists but does not contain the requested path.
    #[error("{path} not found in snapshot {fingerprint}")]
    FileNotFound { fingerprint: Fingerprint, path: String },

    /// A source file could not be copied into a snapshot.
    #[error("failed to copy {path} into snapshot: {source}")]
    CopyFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A persisted state file exists but cannot be decoded.
    #[error("corrupt state file {path}: {reason}")]
    CorruptState { path: String, reason: String },

    /// A snapshot-relative path is malformed.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Serialization failure while writing a state file.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
