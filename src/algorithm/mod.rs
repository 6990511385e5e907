//! Deficiency resolution algorithms
//!
//! Each stage is a plain function over the shared [`ReferenceCatalogs`]:
//!
//! 1. [`extraction`] turns report lines or label/value pairs into resolved readings
//! 2. [`classifier`] assesses readings against their normal ranges
//! 3. [`needs`] maps abnormal parameters to nutrients
//! 4. [`graph`] builds the nutrient dependency graph
//! 5. [`narrative`] renders the textual trace
//!
//! [`recommend`] and [`details`] answer follow-up questions about an analysis, and
//! [`analysis`] ties the stages together.
//!
//! [`ReferenceCatalogs`]: crate::catalog::ReferenceCatalogs

pub mod analysis;
pub mod classifier;
pub mod details;
pub mod extraction;
pub mod graph;
pub mod narrative;
pub mod needs;
pub mod recommend;
pub mod resolver;

pub use analysis::{AnalysisReport, DeficiencyEngine};
pub use classifier::{assess, classify};
pub use details::parameter_details;
pub use extraction::{RawReading, extract_from_lines, extract_readings, parse_report_line};
pub use graph::{DeeperDependency, GraphBuilder, build_for_root, build_graph, deeper_dependencies};
pub use narrative::render;
pub use needs::{map_deficiencies, nutrients_for};
pub use recommend::{foods, rda, recommend};
pub use resolver::resolve;
