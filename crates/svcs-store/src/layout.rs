//! On-disk layout of the control directory.
//!
//! ```text
//! <root>/<control_dir>/
//!   config.txt          {"name": ...}
//!   index.txt           {"files": [{"path": ...}]}
//!   log.txt             {"commits": [{"hash", "author", "message"}]}
//!   commits/<hash>/...  one snapshot per fingerprint
//! ```

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use svcs_types::Fingerprint;
use tracing::debug;

use crate::error::StoreResult;

/// Paths of every persisted artifact for one project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
    control_dir: PathBuf,
}

impl Layout {
    /// Control directory name used when none is configured.
    pub const DEFAULT_CONTROL_DIR: &'static str = "vcs";

    /// Layout with the default control directory under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_control_dir(root, Self::DEFAULT_CONTROL_DIR)
    }

    /// Layout with a custom control directory name under `root`.
    pub fn with_control_dir(root: impl Into<PathBuf>, control_dir: impl AsRef<Path>) -> Self {
        let root = root.into();
        let control_dir = root.join(control_dir);
        Self { root, control_dir }
    }

    /// The project root; tracked paths are relative to it.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn control_dir(&self) -> &Path {
        &self.control_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.control_dir.join("config.txt")
    }

    pub fn index_file(&self) -> PathBuf {
        self.control_dir.join("index.txt")
    }

    pub fn log_file(&self) -> PathBuf {
        self.control_dir.join("log.txt")
    }

    pub fn commits_dir(&self) -> PathBuf {
        self.control_dir.join("commits")
    }

    /// Directory holding the snapshot named by `fingerprint`.
    pub fn snapshot_dir(&self, fingerprint: &Fingerprint) -> PathBuf {
        self.commits_dir().join(fingerprint.to_hex())
    }

    /// Create the control directory, the snapshot root, and empty state files.
    ///
    /// Existing files are left untouched.
    pub fn init(&self) -> StoreResult<()> {
        fs::create_dir_all(self.commits_dir())?;
        for file in [self.config_file(), self.index_file(), self.log_file()] {
            OpenOptions::new().create(true).append(true).open(&file)?;
        }
        debug!(control_dir = %self.control_dir.display(), "layout initialized");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_control_dir_is_vcs() {
        let layout = Layout::new("/project");
        assert_eq!(layout.control_dir(), Path::new("/project/vcs"));
        assert_eq!(layout.index_file(), PathBuf::from("/project/vcs/index.txt"));
        assert_eq!(layout.commits_dir(), PathBuf::from("/project/vcs/commits"));
    }

    #[test]
    fn snapshot_dir_is_named_by_hex() {
        let layout = Layout::with_control_dir("/p", ".svcs");
        let fp = Fingerprint::from_digest([0xaa; 16]);
        assert_eq!(
            layout.snapshot_dir(&fp),
            PathBuf::from(format!("/p/.svcs/commits/{}", "aa".repeat(16)))
        );
    }

    #[test]
    fn init_creates_files_and_keeps_content() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::new(dir.path());
        layout.init().unwrap();
        assert!(layout.commits_dir().is_dir());
        assert!(layout.config_file().is_file());

        fs::write(layout.config_file(), br#"{"name":"bob"}"#).unwrap();
        layout.init().unwrap();
        assert_eq!(fs::read(layout.config_file()).unwrap(), br#"{"name":"bob"}"#);
    }
}
