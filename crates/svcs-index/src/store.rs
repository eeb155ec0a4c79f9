//! Persistence of the index file.

use std::path::{Path, PathBuf};

use svcs_store::{load_state, save_state, Layout, StoreError};
use tracing::debug;

use crate::error::IndexResult;
use crate::index::Index;

/// Loads and saves the [`Index`] as `{"files": [{"path": ...}]}`.
#[derive(Clone, Debug)]
pub struct IndexStore {
    path: PathBuf,
}

impl IndexStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the layout's index file.
    pub fn for_layout(layout: &Layout) -> Self {
        Self::new(layout.index_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index; a missing or blank file yields an empty index.
    ///
    /// Every entry is normalized again. An entry that escapes the project
    /// root makes the whole file [`StoreError::CorruptState`].
    pub fn load(&self) -> IndexResult<Index> {
        let mut index: Index = load_state(&self.path)?;
        index
            .normalize_loaded()
            .map_err(|e| StoreError::CorruptState {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
        debug!(entries = index.len(), "index loaded");
        Ok(index)
    }

    /// Persist the full index, replacing the previous file.
    pub fn save(&self, index: &Index) -> IndexResult<()> {
        save_state(&self.path, index)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndexError;
    use crate::index::{DuplicatePolicy, TrackOutcome};
    use std::fs;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = IndexStore::new(dir.path().join("index.txt"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_and_reload_preserves_order_and_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), b"b").unwrap();
        fs::write(dir.path().join("a.txt"), b"a").unwrap();

        let mut index = Index::new();
        index.track(dir.path(), "b.txt", DuplicatePolicy::Allow).unwrap();
        index.track(dir.path(), "a.txt", DuplicatePolicy::Allow).unwrap();
        index.track(dir.path(), "b.txt", DuplicatePolicy::Allow).unwrap();

        let store = IndexStore::new(dir.path().join("vcs/index.txt"));
        store.save(&index).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, index);
        assert_eq!(loaded.len(), 3);
    }

    #[test]
    fn reads_file_written_by_hand() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.txt");
        fs::write(&path, r#"{"files":[{"path":"x.txt"},{"path":"d/y.txt"}]}"#).unwrap();

        let index = IndexStore::new(&path).load().unwrap();
        assert!(index.contains("x.txt"));
        assert!(index.contains("d/y.txt"));
    }

    #[test]
    fn escaping_entry_is_corrupt_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.txt");
        fs::write(&path, r#"{"files":[{"path":"a.txt"},{"path":"./../outside.txt"}]}"#).unwrap();

        let err = IndexStore::new(&path).load().unwrap_err();
        assert!(matches!(err, IndexError::Store(StoreError::CorruptState { .. })));
    }

    #[test]
    fn absolute_entry_is_corrupt_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.txt");
        fs::write(&path, r#"{"files":[{"path":"/etc/passwd"}]}"#).unwrap();

        let err = IndexStore::new(&path).load().unwrap_err();
        assert!(matches!(err, IndexError::Store(StoreError::CorruptState { .. })));
    }

    #[test]
    fn dot_prefixed_entries_are_normalized() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"a").unwrap();
        let path = dir.path().join("index.txt");
        fs::write(&path, r#"{"files":[{"path":"./a.txt"},{"path":"./d/./b.txt"}]}"#).unwrap();

        let mut index = IndexStore::new(&path).load().unwrap();
        let paths: Vec<&str> = index.list().iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["a.txt", "d/b.txt"]);

        let outcome = index.track(dir.path(), "a.txt", DuplicatePolicy::Ignore).unwrap();
        assert_eq!(outcome, TrackOutcome::AlreadyTracked("a.txt".into()));
        assert_eq!(index.len(), 2);

        let dirs: Vec<String> = index
            .expand_with_directories()
            .into_iter()
            .filter(|e| e.is_dir)
            .map(|e| e.path)
            .collect();
        assert_eq!(dirs, vec!["d".to_string()]);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.txt");
        fs::write(&path, r#"{"files": 42}"#).unwrap();

        let err = IndexStore::new(&path).load().unwrap_err();
        assert!(matches!(err, IndexError::Store(StoreError::CorruptState { .. })));
    }
}
