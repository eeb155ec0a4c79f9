//! JSON state files (config, index, log).
//!
//! A missing or blank file loads as the default value. A file with content
//! that does not decode is reported as [`StoreError::CorruptState`] rather
//! than silently discarded. Writes go through a temp file in the same
//! directory and a rename, so readers never observe a half-written file.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Load a state record, defaulting when the file is absent or blank.
pub fn load_state<T>(path: &Path) -> StoreResult<T>
where
    T: DeserializeOwned + Default,
{
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(e.into()),
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(&bytes).map_err(|e| StoreError::CorruptState {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Replace a state record on disk.
pub fn save_state<T: Serialize>(path: &Path, value: &T) -> StoreResult<()> {
    let data = serde_json::to_vec(value).map_err(|e| StoreError::Serialization(e.to_string()))?;

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(&data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), len = data.len(), "state saved");
    Ok(())
}
