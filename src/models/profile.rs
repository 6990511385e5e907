//! Demographic attributes keying RDA lookups.

use serde::{Deserialize, Serialize};

/// Who the analysis is for. Supplied once per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicProfile {
    pub age: u32,
    pub gender: String,
    pub activity_level: String,
    /// Body weight in kilograms; reported back but not used to select an RDA row
    #[serde(default)]
    pub weight_kg: Option<f64>,
}

impl DemographicProfile {
    #[must_use]
    pub fn new(age: u32, gender: impl Into<String>, activity_level: impl Into<String>) -> Self {
        Self {
            age,
            gender: gender.into(),
            activity_level: activity_level.into(),
            weight_kg: None,
        }
    }

    #[must_use]
    pub const fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }
}
