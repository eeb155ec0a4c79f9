//! Repository options and the persisted user identity.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use svcs_index::DuplicatePolicy;
use svcs_store::{load_state, save_state, Layout, StoreResult};

/// How a repository is opened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoOptions {
    /// Name of the control directory under the project root.
    pub control_dir: String,
    /// Behavior when tracking an already-tracked path.
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for RepoOptions {
    fn default() -> Self {
        Self {
            control_dir: Layout::DEFAULT_CONTROL_DIR.to_string(),
            duplicate_policy: DuplicatePolicy::Allow,
        }
    }
}

impl RepoOptions {
    pub fn with_control_dir(mut self, control_dir: impl Into<String>) -> Self {
        self.control_dir = control_dir.into();
        self
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}

/// The user identity recorded as author on every commit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub name: String,
}

impl UserConfig {
    /// The configured name, if any.
    pub fn name(&self) -> Option<&str> {
        Some(self.name.as_str()).filter(|n| !n.is_empty())
    }
}

/// Result of a `config` request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigOutcome {
    /// No name has been configured and none was given.
    Unset,
    /// The current (possibly just updated) name.
    Name(String),
}

/// Loads and saves the config file as `{"name": ...}`.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn for_layout(layout: &Layout) -> Self {
        Self {
            path: layout.config_file(),
        }
    }

    pub fn load(&self) -> StoreResult<UserConfig> {
        load_state(&self.path)
    }

    pub fn save(&self, config: &UserConfig) -> StoreResult<()> {
        save_state(&self.path, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = RepoOptions::default();
        assert_eq!(opts.control_dir, "vcs");
        assert_eq!(opts.duplicate_policy, DuplicatePolicy::Allow);
    }

    #[test]
    fn options_builder() {
        let opts = RepoOptions::default()
            .with_control_dir(".svcs")
            .with_duplicate_policy(DuplicatePolicy::Ignore);
        assert_eq!(opts.control_dir, ".svcs");
        assert_eq!(opts.duplicate_policy, DuplicatePolicy::Ignore);
    }

    #[test]
    fn empty_name_is_unset() {
        assert_eq!(UserConfig::default().name(), None);
        let cfg = UserConfig { name: "ann".into() };
        assert_eq!(cfg.name(), Some("ann"));
    }

    #[test]
    fn config_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::new(dir.path());
        let store = ConfigStore::for_layout(&layout);

        assert_eq!(store.load().unwrap(), UserConfig::default());
        store.save(&UserConfig { name: "ann".into() }).unwrap();
        assert_eq!(
            std::fs::read_to_string(layout.config_file()).unwrap(),
            r#"{"name":"ann"}"#
        );
        assert_eq!(store.load().unwrap().name, "ann");
    }
}
