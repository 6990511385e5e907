//! Logging utilities
//!
//! Consistent log formats for catalog loading and analysis runs.

pub mod log;

pub use log::{log_row_skipped, log_table_loaded, log_table_start, log_warning};
