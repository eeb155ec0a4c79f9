//! Error types for the index crate.

/// Errors that can occur during index operations.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// The path to track does not exist on disk.
    #[error("can't find '{0}'")]
    NotFound(String),

    /// The path exists but is not a regular file.
    #[error("not a file: {0}")]
    NotAFile(String),

    /// An invalid path was provided.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Loading or saving the index file failed.
    #[error("store error: {0}")]
    Store(#[from] svcs_store::StoreError),

    /// I/O error while inspecting the working tree.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for index results.
pub type IndexResult<T> = Result<T, IndexError>;
