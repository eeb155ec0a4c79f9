//! Tracked path type and project-relative path normalization.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A path registered in the index, relative to the project root.
///
/// Paths always use `/` as separator. `is_dir` is never persisted; it is set
/// only on the synthetic ancestor entries produced by index expansion.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackedPath {
    /// Relative path from the project root.
    pub path: String,
    /// Whether this entry stands for a directory rather than a file.
    #[serde(skip)]
    pub is_dir: bool,
}

impl TrackedPath {
    /// A file entry.
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
        }
    }

    /// A directory entry.
    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
        }
    }

    /// Ancestor directories between the root and this path, root-to-leaf.
    ///
    /// `d/e/f.txt` yields `["d", "d/e"]`; a top-level path yields nothing.
    pub fn ancestors(&self) -> Vec<String> {
        let parts: Vec<&str> = self.path.split('/').collect();
        let mut result = Vec::with_capacity(parts.len().saturating_sub(1));
        let mut current = String::new();
        for part in &parts[..parts.len().saturating_sub(1)] {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(part);
            result.push(current.clone());
        }
        result
    }

    /// Resolve this entry against a base directory.
    pub fn resolve(&self, base: &Path) -> PathBuf {
        self.path.split('/').fold(base.to_path_buf(), |acc, part| acc.join(part))
    }
}

/// Normalize a relative path into the `/`-separated form stored in the index.
///
/// `.` components are dropped and `..` components are folded. Fails if the
/// result is empty, absolute, or climbs above the root.
pub fn normalize_relative(path: &Path) -> Result<String, TypeError> {
    let mut parts: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::Normal(part) => {
                let part = part
                    .to_str()
                    .ok_or_else(|| TypeError::InvalidPath(format!("{} is not UTF-8", path.display())))?;
                parts.push(part.to_string());
            }
            Component::ParentDir => {
                if parts.pop().is_none() {
                    return Err(TypeError::InvalidPath(format!(
                        "{} escapes the project root",
                        path.display()
                    )));
                }
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(TypeError::InvalidPath(format!(
                    "{} is not relative",
                    path.display()
                )));
            }
        }
    }

    if parts.is_empty() {
        return Err(TypeError::InvalidPath(format!(
            "{} does not name a file",
            path.display()
        )));
    }
    Ok(parts.join("/"))
}
