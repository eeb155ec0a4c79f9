use svcs_index::IndexError;
use svcs_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("commit message is empty")]
    EmptyMessage,

    #[error("commit does not exist: {0}")]
    CommitNotFound(String),

    #[error("index error: {0}")]
    Index(#[from] IndexError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("ledger error: {0}")]
    Ledger(#[from] svcs_ledger::LedgerError),

    #[error("fingerprint error: {0}")]
    Fingerprint(#[from] svcs_crypto::FingerprintError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SdkError {
    /// Whether the condition is the user's to fix (bad argument, unknown
    /// commit, missing file) rather than an environment failure.
    pub fn is_user_error(&self) -> bool {
        match self {
            Self::EmptyMessage | Self::CommitNotFound(_) => true,
            Self::Index(e) => matches!(
                e,
                IndexError::NotFound(_) | IndexError::NotAFile(_) | IndexError::InvalidPath(_)
            ),
            Self::Store(e) => matches!(e, StoreError::FileNotFound { .. }),
            _ => false,
        }
    }
}

pub type SdkResult<T> = Result<T, SdkError>;
