//! File I/O utilities.

use crate::{FileTextError, Result};
use std::path::Path;
use tokio::fs;

/// Read a file asynchronously.
///
/// # Errors
///
/// Returns `FileTextError::Io` for I/O errors.
pub async fn read_file_async(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    fs::read(path.as_ref()).await.map_err(FileTextError::Io)
}

/// Whether anything exists at `path` (file, directory or symlink target).
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Validate that a file exists.
///
/// # Errors
///
/// Returns `FileTextError::Validation` if nothing exists at `path`.
pub fn validate_file_exists(path: impl AsRef<Path>) -> Result<()> {
    if !file_exists(&path) {
        return Err(FileTextError::validation(format!(
            "File not found: {}",
            path.as_ref().display()
        )));
    }
    Ok(())
}
