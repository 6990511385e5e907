//! Nutrient-to-nutrient relationships from the dependency table.

use serde::Serialize;

/// Sentinel written in the parent column when a row has no parent
pub const NO_PARENT: &str = "None";

/// One validated row of the dependency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NutrientDependency {
    /// `None` when the source cell is empty or holds the `"None"` sentinel
    pub parent: Option<String>,
    pub child: String,
    pub relation_type: Option<String>,
    pub comments: Option<String>,
    pub body_signs: Option<String>,
}

impl NutrientDependency {
    /// Interpret a raw parent cell, mapping blanks and the sentinel to `None`
    #[must_use]
    pub fn parse_parent(raw: Option<&str>) -> Option<String> {
        raw.map(str::trim)
            .filter(|p| !p.is_empty() && !p.eq_ignore_ascii_case(NO_PARENT))
            .map(str::to_string)
    }
}
