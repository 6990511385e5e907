//! Test utilities
//!
//! Fixture catalogs shared by unit tests, integration tests and benchmarks.

pub mod fixtures;
pub mod helpers;

pub use fixtures::{sample_catalogs, sample_tables};
pub use helpers::{timed_execution, write_catalog};
