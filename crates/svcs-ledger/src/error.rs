/// Errors produced by ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("store error: {0}")]
    Store(#[from] svcs_store::StoreError),
}

/// Convenience alias for ledger results.
pub type LedgerResult<T> = Result<T, LedgerError>;
