//! Textual trace of deficiencies and their dependencies
//!
//! ```text
//! Nutrient Deficiency Dependencies:
//!
//!
//! Parameter: Hemoglobin
//!   → Iron
//!     → Hemoglobin
//!     → Vitamin C
//!   → Folate
//!     → Folate (no parent recorded)
//!     → Vitamin B12
//! ```
//!
//! Deeper lines use the same lookup and direction as the graph builder, so the trace
//! and the graph always agree.

use std::fmt::Write as _;

use super::graph::deeper_dependencies;
use crate::catalog::ReferenceCatalogs;
use crate::config::EdgeDirection;
use crate::models::{DeficiencyMap, DeficiencyOutcome, EdgeKind};

pub const NARRATIVE_HEADER: &str = "Nutrient Deficiency Dependencies:\n\n";
pub const NO_DEFICIENCIES: &str = "No deficiencies found.";
pub const NO_DEEPER_DEPENDENCIES: &str = "no deeper dependencies";

/// Render the trace for every flagged parameter, or the no-deficiency sentinel
#[must_use]
pub fn render(
    catalogs: &ReferenceCatalogs,
    deficiencies: &DeficiencyMap,
    direction: EdgeDirection,
) -> String {
    if deficiencies.outcome() == DeficiencyOutcome::NoDeficiencies {
        return NO_DEFICIENCIES.to_string();
    }

    let mut out = String::from(NARRATIVE_HEADER);
    for need in deficiencies {
        let _ = writeln!(out, "\nParameter: {}", need.parameter);
        for nutrient in &need.nutrients {
            let _ = writeln!(out, "  → {nutrient}");

            let deeper = deeper_dependencies(catalogs, nutrient, direction);
            if deeper.is_empty() {
                let _ = writeln!(out, "    → {NO_DEEPER_DEPENDENCIES}");
            }
            for dependency in deeper {
                match dependency.kind {
                    EdgeKind::Fallback => {
                        let _ = writeln!(out, "    → {} (no parent recorded)", dependency.target);
                    }
                    _ => {
                        let _ = writeln!(out, "    → {}", dependency.target);
                    }
                }
            }
        }
    }
    out
}
