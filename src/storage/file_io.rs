//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't leave a half-written budget file
//! behind on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ExpenseError;

/// Read a file's raw bytes, returning `None` if it doesn't exist
///
/// Decoding is left to the caller so undecodable content can be reported as
/// bad data instead of an I/O failure.
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Option<Vec<u8>>, ExpenseError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    fs::read(path)
        .map(Some)
        .map_err(|e| ExpenseError::Storage(format!("Failed to read {}: {}", path.display(), e)))
}

/// Ensure the parent directory of `path` exists
pub fn ensure_parent<P: AsRef<Path>>(path: P) -> Result<(), ExpenseError> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The previous content is replaced in full.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), ExpenseError> {
    let path = path.as_ref();
    ensure_parent(path)?;

    // Temp file must live in the same directory for the rename to be atomic
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_name);

    write_and_sync(&temp_path, contents).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        e
    })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn write_and_sync(path: &Path, contents: &str) -> Result<(), ExpenseError> {
    let file = File::create(path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| ExpenseError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| ExpenseError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ExpenseError::Storage(format!("Failed to sync data: {}", e)))
}
