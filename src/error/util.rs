//! Utility functions for error handling
//!
//! Helpers that open catalog files and directories with rich error context.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;

use crate::error::Result;

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        anyhow::bail!("File not found: {} (needed for: {purpose})", path.display());
    }

    if !path.is_file() {
        anyhow::bail!(
            "Path is not a file: {} (expected a file for: {purpose})",
            path.display()
        );
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            io::ErrorKind::NotFound => {
                "File not found - it may have been deleted during operation".to_string()
            }
            _ => format!("Failed to open file for: {purpose}"),
        };
        anyhow::Error::new(e).context(format!("{context}: {}", path.display()))
    })
}

/// Check if a directory exists and is readable, with rich error information
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.exists() {
        anyhow::bail!(
            "Directory not found: {} (needed for: {purpose})",
            path.display()
        );
    }

    if !path.is_dir() {
        anyhow::bail!(
            "Path is not a directory: {} (expected a directory for: {purpose})",
            path.display()
        );
    }

    fs::read_dir(path)
        .map(|_| ())
        .with_context(|| format!("Failed to access directory for {purpose}: {}", path.display()))
}

/// Safely read a file to string with rich error information
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    let mut file = safe_open_file(path, purpose)?;

    let mut content = String::new();
    io::Read::read_to_string(&mut file, &mut content).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::InvalidData => {
                "File contains invalid UTF-8 data - cannot read as text".to_string()
            }
            _ => format!("Failed to read file content for: {purpose}"),
        };
        anyhow::Error::new(e).context(format!("{context}: {}", path.display()))
    })?;
    Ok(content)
}
