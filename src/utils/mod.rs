//! Utility modules shared across catalog loading and the engine.

pub mod io;
pub mod logging;
pub mod test;

pub use io::{read_parquet, write_parquet};
