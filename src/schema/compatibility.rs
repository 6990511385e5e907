//! Module for handling data type compatibility checks.

use arrow::datatypes::DataType;

/// Types of data type compatibility
#[derive(Debug, PartialEq, Eq)]
pub enum TypeCompatibility {
    /// Types match exactly
    Exact,
    /// Types can be automatically converted
    Compatible,
    /// Types are incompatible
    Incompatible,
}

/// Check if two Arrow data types are compatible for conversion
#[must_use]
pub fn check_type_compatibility(from: &DataType, to: &DataType) -> TypeCompatibility {
    if from == to {
        return TypeCompatibility::Exact;
    }

    match (from, to) {
        // Integer widening
        (DataType::Int8, DataType::Int16 | DataType::Int32 | DataType::Int64)
        | (DataType::Int16, DataType::Int32 | DataType::Int64)
        | (DataType::Int32, DataType::Int64)
        | (DataType::UInt8 | DataType::UInt16 | DataType::UInt32, DataType::Int64)
        | (DataType::Float32, DataType::Float64) => TypeCompatibility::Compatible,

        // Spreadsheet exports write whole numbers as doubles
        (DataType::Float32 | DataType::Float64, DataType::Int64) => {
            TypeCompatibility::Compatible
        }

        // Integer to float conversions
        (
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64,
            DataType::Float64,
        ) => TypeCompatibility::Compatible,

        // Numbers stored where text is expected
        (
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::Float32
            | DataType::Float64,
            DataType::Utf8,
        ) => TypeCompatibility::Compatible,

        // Between string types
        (DataType::LargeUtf8 | DataType::Utf8View, DataType::Utf8) => {
            TypeCompatibility::Compatible
        }

        // Text that may parse as a number; unparseable cells become null
        (DataType::Utf8 | DataType::LargeUtf8, DataType::Float64 | DataType::Int64) => {
            TypeCompatibility::Compatible
        }

        // An all-null column converts to anything
        (DataType::Null, _) => TypeCompatibility::Compatible,

        _ => TypeCompatibility::Incompatible,
    }
}
