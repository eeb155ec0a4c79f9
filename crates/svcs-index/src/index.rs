//! The ordered index of tracked paths.
//!
//! The [`Index`] is a plain ordered sequence, not a set: insertion order
//! defines the byte order fed to the fingerprint function, and under
//! [`DuplicatePolicy::Allow`] the same path may appear more than once.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use svcs_types::{normalize_relative, TrackedPath, TypeError};
use tracing::debug;

use crate::error::{IndexError, IndexResult};

/// What happens when an already-tracked path is tracked again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Append a second entry; its bytes count twice in every fingerprint.
    #[default]
    Allow,
    /// Leave the index unchanged.
    Ignore,
}

/// Result of a successful `track`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackOutcome {
    /// A new entry was appended.
    Tracked(String),
    /// The path was already present and the index is unchanged.
    AlreadyTracked(String),
}

impl TrackOutcome {
    /// Normalized path the outcome refers to.
    pub fn path(&self) -> &str {
        match self {
            Self::Tracked(p) | Self::AlreadyTracked(p) => p,
        }
    }

    /// Whether the index changed and needs saving.
    pub fn is_new(&self) -> bool {
        matches!(self, Self::Tracked(_))
    }
}

/// Ordered set of tracked file paths.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    files: Vec<TrackedPath>,
}

impl Index {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Whether `path` (normalized form) is tracked.
    pub fn contains(&self, path: &str) -> bool {
        self.files.iter().any(|f| f.path == path)
    }

    /// Tracked entries in insertion order.
    pub fn list(&self) -> &[TrackedPath] {
        &self.files
    }

    /// Track a file, resolving `path` against the project `root`.
    ///
    /// Relative paths are taken relative to `root`; absolute paths must lie
    /// inside it. The file must exist at call time.
    pub fn track(
        &mut self,
        root: &Path,
        path: impl AsRef<Path>,
        policy: DuplicatePolicy,
    ) -> IndexResult<TrackOutcome> {
        let input = path.as_ref();
        let display = input.display().to_string();
        if input.as_os_str().is_empty() {
            return Err(IndexError::InvalidPath("empty path".to_string()));
        }

        let relative = project_relative(root, input)?;
        let normalized =
            normalize_relative(&relative).map_err(|e| IndexError::InvalidPath(e.to_string()))?;
        let entry = TrackedPath::file(normalized);

        match fs::metadata(entry.resolve(root)) {
            Ok(meta) if meta.is_dir() => return Err(IndexError::NotAFile(display)),
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(IndexError::NotFound(display)),
            Err(e) => return Err(e.into()),
        }

        if policy == DuplicatePolicy::Ignore && self.contains(&entry.path) {
            debug!(path = %entry.path, "already tracked");
            return Ok(TrackOutcome::AlreadyTracked(entry.path));
        }

        debug!(path = %entry.path, position = self.files.len(), "tracking");
        let outcome = TrackOutcome::Tracked(entry.path.clone());
        self.files.push(entry);
        Ok(outcome)
    }

    /// Re-normalize entries read back from disk.
    ///
    /// Older control directories store paths as `./a.txt`; those are folded
    /// to the tracked form. Fails on the first entry that is empty, absolute,
    /// or escapes the project root.
    pub(crate) fn normalize_loaded(&mut self) -> Result<(), TypeError> {
        for entry in &mut self.files {
            entry.path = normalize_relative(Path::new(&entry.path))?;
            entry.is_dir = false;
        }
        Ok(())
    }

    /// Entries with every ancestor directory inserted before its file.
    ///
    /// Ancestors are emitted root-to-leaf for each file's own chain, so a
    /// directory shared by several files appears once per file.
    pub fn expand_with_directories(&self) -> Vec<TrackedPath> {
        let mut result = Vec::with_capacity(self.files.len());
        for file in &self.files {
            result.extend(file.ancestors().into_iter().map(TrackedPath::directory));
            result.push(file.clone());
        }
        result
    }
}

fn project_relative(root: &Path, input: &Path) -> IndexResult<PathBuf> {
    if !input.is_absolute() {
        return Ok(input.to_path_buf());
    }
    if let Ok(rest) = input.strip_prefix(root) {
        return Ok(rest.to_path_buf());
    }

    let canonical_root = root.canonicalize()?;
    let canonical_input = match input.canonicalize() {
        Ok(p) => p,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(IndexError::NotFound(input.display().to_string()))
        }
        Err(e) => return Err(e.into()),
    };
    canonical_input
        .strip_prefix(&canonical_root)
        .map(Path::to_path_buf)
        .map_err(|_| IndexError::InvalidPath(format!("{} is outside the project", input.display())))
}
