//! File system helpers for the document cache.
//!
//! All functions report failures as [`McgError::FileSystemError`] with the
//! operation and path preserved, so a failing cache write can be traced back
//! to the exact file.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::core::{McgError, Result};

/// Ensures a directory exists, creating it and all parents if necessary.
///
/// # Errors
///
/// - creation fails (permissions, read-only filesystem, ...)
/// - the path exists but is not a directory
///
/// # Examples
///
/// ```rust
/// use mcgradle_cli::utils::fs::ensure_dir;
///
/// # fn example() -> mcgradle_cli::core::Result<()> {
/// let temp = tempfile::tempdir().unwrap();
/// ensure_dir(&temp.path().join("versions/1.12.2"))?;
/// # Ok(())
/// # }
/// ```
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| McgError::io("create directory", path, e))?;
    } else if !path.is_dir() {
        return Err(McgError::io(
            "create directory",
            path,
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        ));
    }
    Ok(())
}

/// Atomically writes bytes to a file, replacing any previous content.
///
/// The parent directory is created first. Content goes to a temporary file
/// in the same directory, is synced, then renamed over the target so readers
/// never observe a half-written document.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;

    let mut temp = tempfile::NamedTempFile::new_in(parent)
        .map_err(|e| McgError::io("create temp file", parent, e))?;
    temp.write_all(content).map_err(|e| McgError::io("write temp file", temp.path(), e))?;
    temp.as_file().sync_all().map_err(|e| McgError::io("sync temp file", temp.path(), e))?;

    temp.persist(path).map_err(|e| McgError::io("replace file", path, e.error))?;
    Ok(())
}

/// Reads a UTF-8 text file.
pub fn read_text_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| McgError::io("read file", path, e))
}

/// Removes a file if present; returns whether anything was removed.
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(McgError::io("remove file", path, e)),
    }
}
