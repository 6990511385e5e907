//! Row types and Arrow schemas of the reference tables
//!
//! Every cell is optional at this layer: rows are validated when the catalog index is
//! built, so a bad cell costs one row instead of the whole table.

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A reference table stored as one Parquet file
pub trait CatalogTable: Serialize + DeserializeOwned + Send {
    /// Name used in logs and errors
    const TABLE_NAME: &'static str;

    /// Columns the table expects; non-nullable columns must be present in the file
    fn schema() -> SchemaRef;
}

/// Canonical parameter names with an optional alias and unit per row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterRow {
    pub general_name: Option<String>,
    pub alt_name: Option<String>,
    pub unit: Option<String>,
}

impl CatalogTable for ParameterRow {
    const TABLE_NAME: &'static str = "parameters";

    fn schema() -> SchemaRef {
        Arc::new(Schema::new(vec![
            Field::new("general_name", DataType::Utf8, false),
            Field::new("alt_name", DataType::Utf8, true),
            Field::new("unit", DataType::Utf8, true),
        ]))
    }
}

/// Normal-range bounds; kept as text so that unparseable bounds can be reported per row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeRow {
    pub general_name: Option<String>,
    pub min_normal_range: Option<String>,
    pub max_normal_range: Option<String>,
}

impl CatalogTable for RangeRow {
    const TABLE_NAME: &'static str = "ranges";

    fn schema() -> SchemaRef {
        Arc::new(Schema::new(vec![
            Field::new("general_name", DataType::Utf8, false),
            Field::new("min_normal_range", DataType::Utf8, false),
            Field::new("max_normal_range", DataType::Utf8, false),
        ]))
    }
}

/// Causes, effects and things to avoid per parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterDetailRow {
    pub general_name: Option<String>,
    #[serde(rename = "type")]
    pub detail_type: Option<String>,
    pub what_how: Option<String>,
}

impl CatalogTable for ParameterDetailRow {
    const TABLE_NAME: &'static str = "parameter_details";

    fn schema() -> SchemaRef {
        Arc::new(Schema::new(vec![
            Field::new("general_name", DataType::Utf8, false),
            Field::new("type", DataType::Utf8, false),
            Field::new("what_how", DataType::Utf8, false),
        ]))
    }
}

/// Parameter to nutrient need mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NeedRow {
    pub general_name: Option<String>,
    pub nutrient: Option<String>,
}

impl CatalogTable for NeedRow {
    const TABLE_NAME: &'static str = "nutrient_needs";

    fn schema() -> SchemaRef {
        Arc::new(Schema::new(vec![
            Field::new("general_name", DataType::Utf8, false),
            Field::new("nutrient", DataType::Utf8, false),
        ]))
    }
}

/// Nutrient dependency relationships
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencyRow {
    pub parent_nutrient: Option<String>,
    pub child_nutrient: Option<String>,
    pub relation_type: Option<String>,
    pub comments: Option<String>,
    pub body_signs: Option<String>,
}

impl CatalogTable for DependencyRow {
    const TABLE_NAME: &'static str = "nutrient_dependencies";

    fn schema() -> SchemaRef {
        Arc::new(Schema::new(vec![
            Field::new("parent_nutrient", DataType::Utf8, true),
            Field::new("child_nutrient", DataType::Utf8, false),
            Field::new("relation_type", DataType::Utf8, true),
            Field::new("comments", DataType::Utf8, true),
            Field::new("body_signs", DataType::Utf8, true),
        ]))
    }
}

/// Recommended daily allowance by demographic
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RdaRow {
    pub nutrient: Option<String>,
    pub min_age: Option<i64>,
    pub max_age: Option<i64>,
    pub gender: Option<String>,
    pub activity_level: Option<String>,
    pub rda_value: Option<f64>,
}

impl CatalogTable for RdaRow {
    const TABLE_NAME: &'static str = "rda";

    fn schema() -> SchemaRef {
        Arc::new(Schema::new(vec![
            Field::new("nutrient", DataType::Utf8, false),
            Field::new("min_age", DataType::Int64, false),
            Field::new("max_age", DataType::Int64, false),
            Field::new("gender", DataType::Utf8, false),
            Field::new("activity_level", DataType::Utf8, false),
            Field::new("rda_value", DataType::Float64, false),
        ]))
    }
}

/// Foods supplying each nutrient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodRow {
    pub nutrient: Option<String>,
    pub food_name: Option<String>,
    pub nutrient_value: Option<f64>,
    pub nutrient_unit: Option<String>,
}

impl CatalogTable for FoodRow {
    const TABLE_NAME: &'static str = "food_nutrients";

    fn schema() -> SchemaRef {
        Arc::new(Schema::new(vec![
            Field::new("nutrient", DataType::Utf8, false),
            Field::new("food_name", DataType::Utf8, false),
            Field::new("nutrient_value", DataType::Float64, true),
            Field::new("nutrient_unit", DataType::Utf8, true),
        ]))
    }
}

/// All reference tables as decoded rows, in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogTables {
    pub parameters: Vec<ParameterRow>,
    pub ranges: Vec<RangeRow>,
    pub parameter_details: Vec<ParameterDetailRow>,
    pub needs: Vec<NeedRow>,
    pub dependencies: Vec<DependencyRow>,
    pub rda: Vec<RdaRow>,
    pub foods: Vec<FoodRow>,
}
