//! Explicit per-command project state.
//!
//! A command loads a [`ProjectState`] once, mutates it through the
//! repository operations, and saves it at the end. Only the parts that were
//! borrowed mutably are written back.

use svcs_index::{Index, IndexStore};
use svcs_ledger::{Ledger, LedgerStore};
use svcs_store::Layout;
use tracing::debug;

use crate::config::{ConfigStore, UserConfig};
use crate::error::SdkResult;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Dirty {
    config: bool,
    index: bool,
    ledger: bool,
}

/// Config, index, and ledger as loaded for one command.
#[derive(Clone, Debug, Default)]
pub struct ProjectState {
    config: UserConfig,
    index: Index,
    ledger: Ledger,
    dirty: Dirty,
}

impl ProjectState {
    /// Build a state from already-loaded parts. Nothing is marked dirty.
    pub fn new(config: UserConfig, index: Index, ledger: Ledger) -> Self {
        Self {
            config,
            index,
            ledger,
            dirty: Dirty::default(),
        }
    }

    /// Load every state file of `layout`.
    pub fn load(layout: &Layout) -> SdkResult<Self> {
        let config = ConfigStore::for_layout(layout).load()?;
        let index = IndexStore::for_layout(layout).load()?;
        let ledger = LedgerStore::for_layout(layout).load()?;
        Ok(Self::new(config, index, ledger))
    }

    /// Write back the parts that were modified.
    pub fn save(&mut self, layout: &Layout) -> SdkResult<()> {
        if self.dirty.config {
            ConfigStore::for_layout(layout).save(&self.config)?;
        }
        if self.dirty.index {
            IndexStore::for_layout(layout).save(&self.index)?;
        }
        if self.dirty.ledger {
            LedgerStore::for_layout(layout).save(&self.ledger)?;
        }
        debug!(
            config = self.dirty.config,
            index = self.dirty.index,
            ledger = self.dirty.ledger,
            "project state saved"
        );
        self.dirty = Dirty::default();
        Ok(())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty != Dirty::default()
    }

    pub fn config(&self) -> &UserConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut UserConfig {
        self.dirty.config = true;
        &mut self.config
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut Index {
        self.dirty.index = true;
        &mut self.index
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        self.dirty.ledger = true;
        &mut self.ledger
    }
}
