//! Test fixtures
//!
//! A small reference catalog covering aliases, inclusive ranges, parent-less and cyclic
//! dependency rows, a missing RDA row and nutrients without foods.

use crate::catalog::{
    CatalogTables, DependencyRow, FoodRow, NeedRow, ParameterDetailRow, ParameterRow, RangeRow,
    RdaRow, ReferenceCatalogs,
};

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn parameter(name: &str, alias: Option<&str>, unit: Option<&str>) -> ParameterRow {
    ParameterRow {
        general_name: text(name),
        alt_name: alias.and_then(text),
        unit: unit.and_then(text),
    }
}

fn range(name: &str, min: &str, max: &str) -> RangeRow {
    RangeRow {
        general_name: text(name),
        min_normal_range: text(min),
        max_normal_range: text(max),
    }
}

fn need(name: &str, nutrient: &str) -> NeedRow {
    NeedRow {
        general_name: text(name),
        nutrient: text(nutrient),
    }
}

fn dependency(parent: &str, child: &str, relation: &str, comment: &str, signs: &str) -> DependencyRow {
    DependencyRow {
        parent_nutrient: text(parent),
        child_nutrient: text(child),
        relation_type: text(relation),
        comments: text(comment),
        body_signs: text(signs),
    }
}

fn rda(nutrient: &str, ages: (i64, i64), gender: &str, activity: &str, value: f64) -> RdaRow {
    RdaRow {
        nutrient: text(nutrient),
        min_age: Some(ages.0),
        max_age: Some(ages.1),
        gender: text(gender),
        activity_level: text(activity),
        rda_value: Some(value),
    }
}

fn food(nutrient: &str, name: &str, value: f64, unit: &str) -> FoodRow {
    FoodRow {
        nutrient: text(nutrient),
        food_name: text(name),
        nutrient_value: Some(value),
        nutrient_unit: text(unit),
    }
}

fn detail(name: &str, kind: &str, what_how: &str) -> ParameterDetailRow {
    ParameterDetailRow {
        general_name: text(name),
        detail_type: text(kind),
        what_how: text(what_how),
    }
}

/// Reference tables used across unit and integration tests
///
/// - Hemoglobin (12.0 - 16.0, aliases `Hb` and `Haemoglobin`) needs Iron and Folate
/// - Vitamin D (20.0 - 50.0) needs Cholecalciferol and Calcium
/// - Ferritin (30 - 300) needs Iron and Vitamin C
/// - Glucose (70 - 100) has no nutrient needs
/// - Cholesterol has no range row
/// - Calcium and Magnesium depend on each other
/// - Folate has one parent-less row
/// - Iron has no RDA row for 25 year old moderately active women
#[must_use]
pub fn sample_tables() -> CatalogTables {
    CatalogTables {
        parameters: vec![
            parameter("Hemoglobin", Some("Hb"), Some("g/dL")),
            parameter("Hemoglobin", Some("Haemoglobin"), None),
            parameter("Vitamin D", Some("Calcidiol"), Some("ng/mL")),
            parameter("Ferritin", None, Some("ng/mL")),
            parameter("Glucose", Some("Blood Sugar"), Some("mg/dL")),
            parameter("Cholesterol", None, Some("mg/dL")),
        ],
        ranges: vec![
            range("Hemoglobin", "12.0", "16.0"),
            range("Vitamin D", "20.0", "50.0"),
            range("Ferritin", "30", "300"),
            range("Glucose", "70", "100"),
        ],
        parameter_details: vec![
            detail("Hemoglobin", "cause", "Low dietary iron"),
            detail("Hemoglobin", "effect", "Fatigue and shortness of breath"),
            detail("Hemoglobin", "avoid", "Tea with meals"),
            detail("Hemoglobin", "cause", "Blood loss"),
            detail("Hemoglobin", "Cause", "Ignored label"),
            detail("Vitamin D", "effect", "Bone pain"),
        ],
        needs: vec![
            need("Hemoglobin", "Iron"),
            need("Hemoglobin", "Folate"),
            need("Vitamin D", "Cholecalciferol"),
            need("Vitamin D", "Calcium"),
            need("Ferritin", "Iron"),
            need("Ferritin", "Vitamin C"),
        ],
        dependencies: vec![
            dependency(
                "Hemoglobin",
                "Iron",
                "supports",
                "Iron is required to build hemoglobin",
                "Fatigue, pale skin",
            ),
            dependency(
                "Vitamin C",
                "Iron",
                "enhances",
                "Vitamin C improves iron absorption",
                "Bleeding gums",
            ),
            dependency(
                "None",
                "Folate",
                "standalone",
                "Folate acts on its own",
                "Mouth sores",
            ),
            dependency(
                "Vitamin B12",
                "Folate",
                "activates",
                "B12 recycles folate",
                "Numbness",
            ),
            dependency(
                "Calcium",
                "Magnesium",
                "balances",
                "Calcium competes with magnesium",
                "Muscle cramps",
            ),
            dependency(
                "Magnesium",
                "Calcium",
                "regulates",
                "Magnesium regulates calcium transport",
                "Muscle cramps",
            ),
            dependency(
                "Vitamin D",
                "Calcium",
                "enables",
                "Vitamin D is needed to absorb calcium",
                "Brittle nails",
            ),
        ],
        rda: vec![
            rda("Iron", (19, 50), "male", "moderate", 8.0),
            rda("Iron", (19, 50), "female", "active", 18.0),
            rda("Folate", (14, 120), "female", "moderate", 400.0),
            rda("Folate", (19, 120), "female", "moderate", 600.0),
            rda("Calcium", (19, 50), "Female", "Moderate", 1000.0),
            rda("Vitamin C", (19, 120), "female", "moderate", 75.0),
        ],
        foods: vec![
            food("Iron", "Spinach", 2.7, "mg"),
            food("Iron", "Lentils", 3.3, "mg"),
            food("IRON", "Pumpkin Seeds", 8.8, "mg"),
            food("Folate", "Chickpeas", 172.0, "mcg"),
            food("Calcium", "Yogurt", 110.0, "mg"),
        ],
    }
}

/// [`sample_tables`] indexed into catalogs
#[must_use]
pub fn sample_catalogs() -> ReferenceCatalogs {
    ReferenceCatalogs::from_tables(sample_tables())
}
