//! RDA values, food recommendations, and food plans.

use std::fmt;

use itertools::Itertools;
use serde::{Serialize, Serializer};

use super::profile::DemographicProfile;

/// Text shown when no RDA row matches a profile
pub const RDA_NOT_AVAILABLE: &str = "RDA not available";

/// Text shown when a nutrient has no food rows
pub const NO_RECOMMENDATIONS: &str = "no recommendations";

/// One validated row of the RDA table
#[derive(Debug, Clone, PartialEq)]
pub struct RdaEntry {
    pub nutrient: String,
    pub min_age: i64,
    pub max_age: i64,
    pub gender: String,
    pub activity_level: String,
    pub rda_value: f64,
}

impl RdaEntry {
    /// Age within inclusive bounds, gender and activity level equal ignoring case.
    /// The nutrient is matched by the caller's index.
    #[must_use]
    pub fn matches(&self, profile: &DemographicProfile) -> bool {
        let age = i64::from(profile.age);
        self.min_age <= age
            && age <= self.max_age
            && self.gender.trim().eq_ignore_ascii_case(profile.gender.trim())
            && self
                .activity_level
                .trim()
                .eq_ignore_ascii_case(profile.activity_level.trim())
    }
}

/// Result of an RDA lookup; absence is an ordinary outcome
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RdaValue {
    Available(f64),
    NotAvailable,
}

impl fmt::Display for RdaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available(v) => write!(f, "{v}"),
            Self::NotAvailable => f.write_str(RDA_NOT_AVAILABLE),
        }
    }
}

impl Serialize for RdaValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Available(v) => serializer.serialize_f64(*v),
            Self::NotAvailable => serializer.serialize_str(RDA_NOT_AVAILABLE),
        }
    }
}

/// A food supplying a nutrient, from the food-mapping table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodRecommendation {
    pub nutrient: String,
    pub food_name: String,
    pub nutrient_value: Option<f64>,
    pub nutrient_unit: Option<String>,
}

impl fmt::Display for FoodRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.nutrient_value, &self.nutrient_unit) {
            (Some(v), Some(unit)) => write!(f, "{} ({v} {unit})", self.food_name),
            (Some(v), None) => write!(f, "{} ({v})", self.food_name),
            _ => f.write_str(&self.food_name),
        }
    }
}

/// RDA and foods for one aggregated nutrient
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientRecommendation {
    pub nutrient: String,
    pub rda: RdaValue,
    pub foods: Vec<FoodRecommendation>,
}

impl NutrientRecommendation {
    /// Comma-separated foods, or `"no recommendations"`
    #[must_use]
    pub fn foods_summary(&self) -> String {
        if self.foods.is_empty() {
            NO_RECOMMENDATIONS.to_string()
        } else {
            self.foods.iter().join(", ")
        }
    }
}

/// One day of a food plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanDay {
    pub day: String,
    pub food: String,
}

/// Selected foods laid out one per day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FoodPlan {
    days: Vec<PlanDay>,
}

impl FoodPlan {
    /// `Day 1`, `Day 2`, … in selection order
    #[must_use]
    pub fn from_selection<I, S>(foods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let days = foods
            .into_iter()
            .enumerate()
            .map(|(i, food)| PlanDay {
                day: format!("Day {}", i + 1),
                food: food.into(),
            })
            .collect();
        Self { days }
    }

    pub fn days(&self) -> impl Iterator<Item = &PlanDay> {
        self.days.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
