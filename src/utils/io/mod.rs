//! IO utilities for file operations
//!
//! This module provides utilities for reading and writing Parquet catalog files.

pub mod parquet;

// Re-export commonly used functions for convenience
pub use parquet::{read_parquet, write_parquet};
