//! Atomic file operations for crash-safe persistence.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::{PersistenceError, Result};

/// Writes data to a file atomically.
///
/// The data goes to a temporary file in the target's directory, which is
/// then renamed over the target. Readers see either the old or the new
/// contents, never a partial write.
///
/// # Errors
/// Returns an error if the parent directory cannot be created, or if the
/// write or rename fails.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| PersistenceError::DirectoryError {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    // Same directory keeps the rename on one filesystem
    let mut temp_file =
        tempfile::NamedTempFile::new_in(dir).map_err(|source| PersistenceError::WriteError {
            path: path.to_path_buf(),
            source,
        })?;

    temp_file
        .write_all(data)
        .map_err(|source| PersistenceError::WriteError {
            path: path.to_path_buf(),
            source,
        })?;

    temp_file
        .flush()
        .map_err(|source| PersistenceError::WriteError {
            path: path.to_path_buf(),
            source,
        })?;

    // Temp files are created 0600; carry over the mode of the file being replaced
    if let Ok(metadata) = fs::metadata(path) {
        temp_file
            .as_file()
            .set_permissions(metadata.permissions())
            .map_err(|source| PersistenceError::WriteError {
                path: path.to_path_buf(),
                source,
            })?;
    }

    temp_file
        .persist(path)
        .map_err(|e| PersistenceError::WriteError {
            path: path.to_path_buf(),
            source: e.error,
        })?;

    debug!(path = %path.display(), bytes = data.len(), "wrote file");
    Ok(())
}

/// Writes pretty-printed JSON to a file atomically.
pub fn atomic_write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    atomic_write(path, json.as_bytes())
}

/// Reads and deserializes JSON from a file.
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|source| PersistenceError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = data.len(), "read file");
    serde_json::from_str(&data).map_err(|source| PersistenceError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads JSON from a file, returning None if the file doesn't exist.
pub fn read_json_optional<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        debug!(path = %path.display(), "file missing");
        return Ok(None);
    }
    read_json(path).map(Some)
}
