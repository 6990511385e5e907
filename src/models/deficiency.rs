//! Nutrient needs implied by abnormal parameters.

use rustc_hash::FxHashSet;
use serde::Serialize;

use super::normalize_key;
use crate::config::NeedAggregation;

/// Nutrients implicated by one abnormal parameter, in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NutrientNeed {
    pub parameter: String,
    pub nutrients: Vec<String>,
}

/// Abnormal parameters and their nutrient needs, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeficiencyMap {
    needs: Vec<NutrientNeed>,
}

impl DeficiencyMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the needs of `parameter`. A parameter recorded twice keeps its original
    /// position and takes the new nutrient list.
    pub fn insert(&mut self, parameter: impl Into<String>, nutrients: Vec<String>) {
        let parameter = parameter.into();
        match self.needs.iter_mut().find(|n| n.parameter == parameter) {
            Some(existing) => existing.nutrients = nutrients,
            None => self.needs.push(NutrientNeed {
                parameter,
                nutrients,
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &NutrientNeed> {
        self.needs.iter()
    }

    /// Nutrients recorded for `parameter`
    #[must_use]
    pub fn get(&self, parameter: &str) -> Option<&[String]> {
        self.needs
            .iter()
            .find(|n| n.parameter == parameter)
            .map(|n| n.nutrients.as_slice())
    }

    /// Number of abnormal parameters recorded
    #[must_use]
    pub fn len(&self) -> usize {
        self.needs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needs.is_empty()
    }

    /// Every nutrient across all parameters, combined according to `mode`
    #[must_use]
    pub fn aggregate(&self, mode: NeedAggregation) -> Vec<String> {
        let all = self.needs.iter().flat_map(|n| n.nutrients.iter().cloned());
        match mode {
            NeedAggregation::Concatenate => all.collect(),
            NeedAggregation::Deduplicate => {
                let mut seen = FxHashSet::default();
                all.filter(|n| seen.insert(normalize_key(n))).collect()
            }
        }
    }

    /// `NoDeficiencies` when no abnormal parameter implicates any nutrient
    #[must_use]
    pub fn outcome(&self) -> DeficiencyOutcome {
        if self.needs.iter().any(|n| !n.nutrients.is_empty()) {
            DeficiencyOutcome::DeficienciesFound
        } else {
            DeficiencyOutcome::NoDeficiencies
        }
    }
}

impl<'a> IntoIterator for &'a DeficiencyMap {
    type Item = &'a NutrientNeed;
    type IntoIter = std::slice::Iter<'a, NutrientNeed>;

    fn into_iter(self) -> Self::IntoIter {
        self.needs.iter()
    }
}

/// Terminal outcome of an analysis, distinct from a processing failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeficiencyOutcome {
    DeficienciesFound,
    NoDeficiencies,
}
