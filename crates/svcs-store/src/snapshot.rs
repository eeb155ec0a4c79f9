//! Fingerprint-named snapshot directories.
//!
//! Each snapshot mirrors the relative paths of the tracked files (and their
//! ancestor directories) at commit time. Snapshots are immutable: writing a
//! fingerprint that already has a directory does nothing.

use std::fs;
use std::path::{Path, PathBuf};

use svcs_types::{normalize_relative, Fingerprint, TrackedPath};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::layout::Layout;

/// Prefix of in-progress snapshot directories inside `commits/`.
pub const STAGING_PREFIX: &str = ".staging-";

/// Filesystem snapshot store rooted at a layout's `commits/` directory.
#[derive(Clone, Debug)]
pub struct SnapshotStore {
    layout: Layout,
}

impl SnapshotStore {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Whether a snapshot directory exists for `fingerprint`.
    pub fn exists(&self, fingerprint: &Fingerprint) -> bool {
        self.layout.snapshot_dir(fingerprint).is_dir()
    }

    /// Materialize a snapshot from the project's current file contents.
    ///
    /// `entries` is the expanded index: directory entries become empty
    /// directories, file entries are byte-copied from the project root. The
    /// tree is assembled in a staging directory and renamed into place last,
    /// so a failure leaves no `commits/<fingerprint>` behind.
    pub fn write(&self, fingerprint: &Fingerprint, entries: &[TrackedPath]) -> StoreResult<()> {
        let target = self.layout.snapshot_dir(fingerprint);
        if target.is_dir() {
            debug!(fingerprint = %fingerprint.short_hex(), "snapshot already present");
            return Ok(());
        }

        let commits = self.layout.commits_dir();
        fs::create_dir_all(&commits)?;
        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(&commits)?;

        let mut files = 0usize;
        for entry in entries {
            normalize_relative(Path::new(&entry.path))
                .map_err(|e| StoreError::InvalidPath(e.to_string()))?;
            let dst = entry.resolve(staging.path());
            if entry.is_dir {
                fs::create_dir_all(&dst)?;
                continue;
            }
            if let Some(parent) = dst.parent() {
                fs::create_dir_all(parent)?;
            }
            let src = entry.resolve(self.layout.root());
            fs::copy(&src, &dst).map_err(|source| StoreError::CopyFailed {
                path: entry.path.clone(),
                source,
            })?;
            debug!(path = %entry.path, "copied into snapshot");
            files += 1;
        }

        fs::rename(staging.path(), &target)?;
        // The guard now points at a moved directory; its cleanup is a no-op.
        drop(staging);

        info!(fingerprint = %fingerprint.short_hex(), files, "snapshot written");
        Ok(())
    }

    /// On-disk location of `relative_path` inside a snapshot.
    pub fn file_path(&self, fingerprint: &Fingerprint, relative_path: &str) -> StoreResult<PathBuf> {
        let dir = self.layout.snapshot_dir(fingerprint);
        if !dir.is_dir() {
            return Err(StoreError::SnapshotNotFound(*fingerprint));
        }

        let relative = normalize_relative(Path::new(relative_path))
            .map_err(|e| StoreError::InvalidPath(e.to_string()))?;
        let path = TrackedPath::file(relative).resolve(&dir);
        if !path.is_file() {
            return Err(StoreError::FileNotFound {
                fingerprint: *fingerprint,
                path: relative_path.to_string(),
            });
        }
        Ok(path)
    }

    /// Read a file's content from a snapshot.
    pub fn read(&self, fingerprint: &Fingerprint, relative_path: &str) -> StoreResult<Vec<u8>> {
        let path = self.file_path(fingerprint, relative_path)?;
        Ok(fs::read(path)?)
    }

    /// All stored snapshots, sorted by fingerprint.
    ///
    /// Leftover staging directories and foreign entries are skipped.
    pub fn list(&self) -> StoreResult<Vec<Fingerprint>> {
        let commits = self.layout.commits_dir();
        if !commits.is_dir() {
            return Ok(Vec::new());
        }

        let mut result = Vec::new();
        for entry in fs::read_dir(&commits)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name.starts_with(STAGING_PREFIX) {
                continue;
            }
            match name.parse::<Fingerprint>() {
                Ok(fp) => result.push(fp),
                Err(e) => warn!(name, error = %e, "skipping foreign entry in snapshot root"),
            }
        }
        result.sort();
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (tempfile::TempDir, SnapshotStore) {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::new(dir.path());
        layout.init().unwrap();
        (dir, SnapshotStore::new(layout))
    }

    fn write_file(root: &Path, rel: &str, content: &[u8]) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn fp(byte: u8) -> Fingerprint {
        Fingerprint::from_digest([byte; 16])
    }

    #[test]
    fn write_mirrors_tracked_tree() {
        let (dir, store) = setup();
        write_file(dir.path(), "a.txt", b"alpha");
        write_file(dir.path(), "d/b.txt", b"beta");

        let entries = vec![
            TrackedPath::file("a.txt"),
            TrackedPath::directory("d"),
            TrackedPath::file("d/b.txt"),
        ];
        store.write(&fp(1), &entries).unwrap();

        assert!(store.exists(&fp(1)));
        let snap = store.layout().snapshot_dir(&fp(1));
        assert!(snap.join("d").is_dir());
        assert_eq!(store.read(&fp(1), "a.txt").unwrap(), b"alpha");
        assert_eq!(store.read(&fp(1), "d/b.txt").unwrap(), b"beta");
    }

    #[test]
    fn empty_ancestor_directories_are_kept() {
        let (dir, store) = setup();
        write_file(dir.path(), "x/y/z.txt", b"deep");

        let entries = vec![
            TrackedPath::directory("x"),
            TrackedPath::directory("x/y"),
            TrackedPath::directory("x/y/empty"),
            TrackedPath::file("x/y/z.txt"),
        ];
        store.write(&fp(2), &entries).unwrap();
        assert!(store.layout().snapshot_dir(&fp(2)).join("x/y/empty").is_dir());
    }

    #[test]
    fn repeated_entries_are_tolerated() {
        let (dir, store) = setup();
        write_file(dir.path(), "d/a.txt", b"a");
        write_file(dir.path(), "d/b.txt", b"b");

        let entries = vec![
            TrackedPath::directory("d"),
            TrackedPath::file("d/a.txt"),
            TrackedPath::directory("d"),
            TrackedPath::file("d/b.txt"),
            TrackedPath::directory("d"),
            TrackedPath::file("d/a.txt"),
        ];
        store.write(&fp(3), &entries).unwrap();
        assert_eq!(store.read(&fp(3), "d/a.txt").unwrap(), b"a");
        assert_eq!(store.read(&fp(3), "d/b.txt").unwrap(), b"b");
    }

    #[test]
    fn existing_snapshot_is_not_rewritten() {
        let (dir, store) = setup();
        write_file(dir.path(), "a.txt", b"first");
        let entries = vec![TrackedPath::file("a.txt")];
        store.write(&fp(4), &entries).unwrap();

        write_file(dir.path(), "a.txt", b"second");
        store.write(&fp(4), &entries).unwrap();
        assert_eq!(store.read(&fp(4), "a.txt").unwrap(), b"first");
    }

    #[test]
    fn failed_write_leaves_nothing_behind() {
        let (dir, store) = setup();
        write_file(dir.path(), "a.txt", b"present");

        let entries = vec![TrackedPath::file("a.txt"), TrackedPath::file("missing.txt")];
        let err = store.write(&fp(5), &entries).unwrap_err();
        assert!(matches!(err, StoreError::CopyFailed { ref path, .. } if path == "missing.txt"));

        assert!(!store.exists(&fp(5)));
        assert_eq!(fs::read_dir(store.layout().commits_dir()).unwrap().count(), 0);
    }

    #[test]
    fn write_rejects_escaping_entry() {
        let (dir, store) = setup();
        write_file(dir.path(), "a.txt", b"a");

        let entries = vec![TrackedPath::file("a.txt"), TrackedPath::file("../a.txt")];
        let err = store.write(&fp(10), &entries).unwrap_err();
        assert!(matches!(err, StoreError::InvalidPath(_)));
        assert_eq!(fs::read_dir(store.layout().commits_dir()).unwrap().count(), 0);
    }

    #[test]
    fn read_missing_snapshot() {
        let (_dir, store) = setup();
        let err = store.read(&fp(6), "a.txt").unwrap_err();
        assert!(matches!(err, StoreError::SnapshotNotFound(id) if id == fp(6)));
    }

    #[test]
    fn read_missing_file_in_snapshot() {
        let (dir, store) = setup();
        write_file(dir.path(), "a.txt", b"a");
        store.write(&fp(7), &[TrackedPath::file("a.txt")]).unwrap();

        let err = store.read(&fp(7), "b.txt").unwrap_err();
        assert!(matches!(err, StoreError::FileNotFound { .. }));
    }

    #[test]
    fn read_rejects_escaping_path() {
        let (dir, store) = setup();
        write_file(dir.path(), "a.txt", b"a");
        store.write(&fp(8), &[TrackedPath::file("a.txt")]).unwrap();

        let err = store.read(&fp(8), "../../config.txt").unwrap_err();
        assert!(matches!(err, StoreError::InvalidPath(_)));
    }

    #[test]
    fn list_skips_foreign_entries() {
        let (dir, store) = setup();
        write_file(dir.path(), "a.txt", b"a");
        store.write(&fp(9), &[TrackedPath::file("a.txt")]).unwrap();
        store.write(&fp(1), &[TrackedPath::file("a.txt")]).unwrap();
        fs::create_dir(store.layout().commits_dir().join("not-a-hash")).unwrap();
        fs::create_dir(store.layout().commits_dir().join(".staging-abc")).unwrap();

        assert_eq!(store.list().unwrap(), vec![fp(1), fp(9)]);
    }
}
