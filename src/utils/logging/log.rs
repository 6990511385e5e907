//! Logging utilities
//!
//! This module provides standardized logging functions for catalog operations.

use std::path::Path;
use std::time::Duration;

/// Log the start of a table load
///
/// # Arguments
/// * `table` - Catalog table name
/// * `path` - File the table is read from
pub fn log_table_start(table: &str, path: &Path) {
    log::info!("Loading {table} table from {}", path.display());
}

/// Log a completed table load
///
/// # Arguments
/// * `table` - Catalog table name
/// * `path` - File the table was read from
/// * `rows` - Number of rows decoded
/// * `elapsed` - Optional elapsed time
pub fn log_table_loaded(table: &str, path: &Path, rows: usize, elapsed: Option<Duration>) {
    match elapsed {
        Some(duration) => log::info!(
            "Loaded {rows} {table} rows from {} in {duration:?}",
            path.display()
        ),
        None => log::info!("Loaded {rows} {table} rows from {}", path.display()),
    }
}

/// Log a malformed catalog row that was left out of an index
///
/// # Arguments
/// * `table` - Catalog table name
/// * `row` - Zero-based row position in source order
/// * `reason` - Why the row was skipped
pub fn log_row_skipped(table: &str, row: usize, reason: &str) {
    log::warn!("Skipping {table} row {row}: {reason}");
}

/// Log a warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `path` - Optional path related to the warning
pub fn log_warning(message: &str, path: Option<&Path>) {
    if let Some(path) = path {
        log::warn!("{}: {}", message, path.display());
    } else {
        log::warn!("{message}");
    }
}
