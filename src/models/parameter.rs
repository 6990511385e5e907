//! Health parameters, their normal ranges, and readings of them.

use serde::Serialize;

/// A parameter known to the catalog, with the labels it may appear under
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalParameter {
    /// Canonical name, as spelled in the catalog
    pub name: String,
    /// Alternative labels resolving to this parameter
    pub aliases: Vec<String>,
    /// Measurement unit, if the catalog records one
    pub unit: Option<String>,
}

impl CanonicalParameter {
    #[must_use]
    pub fn new(name: impl Into<String>, unit: Option<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            unit,
        }
    }
}

/// Inclusive normal range of a parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub min_normal: f64,
    pub max_normal: f64,
}

impl ParameterRange {
    /// `"{min} - {max}"`, with whole numbers keeping one decimal place (`12.0 - 16.0`)
    #[must_use]
    pub fn formatted(&self) -> String {
        format!(
            "{} - {}",
            format_bound(self.min_normal),
            format_bound(self.max_normal)
        )
    }
}

/// Format a bound the way the catalog displays reals
#[must_use]
pub fn format_bound(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// A reading resolved to a canonical parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterReading {
    pub parameter: String,
    pub value: f64,
}

impl ParameterReading {
    #[must_use]
    pub fn new(parameter: impl Into<String>, value: f64) -> Self {
        Self {
            parameter: parameter.into(),
            value,
        }
    }
}
