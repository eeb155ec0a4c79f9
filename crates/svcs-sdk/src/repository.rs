use std::path::{Path, PathBuf};

use svcs_crypto::fingerprint;
use svcs_index::TrackOutcome;
use svcs_store::{Layout, SnapshotStore};
use svcs_types::{CommitRecord, Fingerprint, TrackedPath};
use tracing::debug;

use crate::checkout::{CheckoutEngine, CheckoutOutcome};
use crate::commit::{self, CommitOutcome};
use crate::config::{ConfigOutcome, RepoOptions};
use crate::error::SdkResult;
use crate::state::ProjectState;

/// High-level SVCS repository API.
///
/// Operations take an explicit [`ProjectState`]; [`Repository::run`] wraps
/// the load → operate → save cycle of a single command.
pub struct Repository {
    snapshots: SnapshotStore,
    options: RepoOptions,
}

impl Repository {
    /// Open the project at `root`, creating the control directory and empty
    /// state files on first use.
    pub fn open(root: impl Into<PathBuf>, options: RepoOptions) -> SdkResult<Self> {
        let layout = Layout::with_control_dir(root, &options.control_dir);
        layout.init()?;
        debug!(root = %layout.root().display(), "repository opened");
        Ok(Self {
            snapshots: SnapshotStore::new(layout),
            options,
        })
    }

    /// Load the state, run `op`, and save whatever it modified.
    ///
    /// Nothing is saved when `op` fails.
    pub fn run<T>(
        &self,
        op: impl FnOnce(&Self, &mut ProjectState) -> SdkResult<T>,
    ) -> SdkResult<T> {
        let mut state = self.load_state()?;
        let result = op(self, &mut state)?;
        state.save(self.layout())?;
        Ok(result)
    }

    pub fn load_state(&self) -> SdkResult<ProjectState> {
        ProjectState::load(self.layout())
    }

    // ---- Config ----

    /// Set the username when `name` is given; report the current one.
    pub fn configure(&self, state: &mut ProjectState, name: Option<&str>) -> ConfigOutcome {
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            state.config_mut().name = name.to_string();
        }
        match state.config().name() {
            Some(name) => ConfigOutcome::Name(name.to_string()),
            None => ConfigOutcome::Unset,
        }
    }

    // ---- Index ----

    /// Track a file (relative to the project root, or absolute inside it).
    pub fn track(&self, state: &mut ProjectState, path: impl AsRef<Path>) -> SdkResult<TrackOutcome> {
        let mut index = state.index().clone();
        let outcome = index.track(self.root(), path, self.options.duplicate_policy)?;
        if outcome.is_new() {
            *state.index_mut() = index;
        }
        Ok(outcome)
    }

    /// Tracked files in index order.
    pub fn tracked<'s>(&self, state: &'s ProjectState) -> &'s [TrackedPath] {
        state.index().list()
    }

    /// Fingerprint of the tracked files as they are on disk now.
    pub fn fingerprint(&self, state: &ProjectState) -> SdkResult<Fingerprint> {
        Ok(fingerprint(self.root(), state.index().list())?)
    }

    // ---- Commit and history ----

    pub fn commit(&self, state: &mut ProjectState, message: &str) -> SdkResult<CommitOutcome> {
        commit::commit(&self.snapshots, state, message)
    }

    /// Ledger records, oldest first.
    pub fn log<'s>(&self, state: &'s ProjectState) -> &'s [CommitRecord] {
        state.ledger().all()
    }

    // ---- Checkout ----

    pub fn checkout(&self, state: &ProjectState, hash: &str) -> SdkResult<CheckoutOutcome> {
        CheckoutEngine::new(&self.snapshots).run(state.index(), hash)
    }

    // ---- Accessors ----

    pub fn root(&self) -> &Path {
        self.layout().root()
    }

    pub fn layout(&self) -> &Layout {
        self.snapshots.layout()
    }

    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }

    pub fn options(&self) -> &RepoOptions {
        &self.options
    }
}
