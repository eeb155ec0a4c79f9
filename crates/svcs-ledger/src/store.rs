//! Persistence of the log file.

use std::path::{Path, PathBuf};

use svcs_store::{load_state, save_state, Layout};
use tracing::debug;

use crate::error::LedgerResult;
use crate::ledger::Ledger;

/// Loads and saves the [`Ledger`] as `{"commits": [...]}`.
///
/// Every save rewrites the whole file; histories are expected to stay small.
#[derive(Clone, Debug)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn for_layout(layout: &Layout) -> Self {
        Self::new(layout.log_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> LedgerResult<Ledger> {
        let ledger: Ledger = load_state(&self.path)?;
        debug!(commits = ledger.len(), "ledger loaded");
        Ok(ledger)
    }

    pub fn save(&self, ledger: &Ledger) -> LedgerResult<()> {
        save_state(&self.path, ledger)?;
        Ok(())
    }
}
