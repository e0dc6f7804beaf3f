//! Storage-column derivation.

use serde::{Deserialize, Serialize};

use crate::category::TypeCategory;
use crate::field::FieldDefinition;

/// Storage type of a derived column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// Bounded string column.
    Varchar {
        /// Declared maximum length, when known.
        length: Option<u32>,
    },
    /// Unbounded text column.
    Text,
    /// 32-bit integer column.
    Integer,
    /// 64-bit integer column.
    BigInt,
    /// Boolean column.
    Boolean,
    /// Calendar-date column.
    Date,
    /// Date-and-time column.
    DateTime,
    /// Fixed-point numeric column.
    Decimal {
        /// Total number of digits.
        precision: u32,
        /// Digits to the right of the decimal point.
        scale: u32,
    },
    /// Column constrained to a closed value set.
    Enum {
        /// Allowed values, in declaration order.
        values: Vec<String>,
    },
}

/// A derived storage column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageColumnSpec {
    /// Column name.
    pub name: String,
    /// Storage type.
    pub column_type: ColumnType,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Default value expression, when one applies.
    pub default: Option<String>,
}

/// Derive the storage column for one field.
///
/// Total: unrecognized types fall back to a generic string column.
/// Temporal and decimal columns are always stored nullable; boolean
/// columns carry `DEFAULT false`.
pub fn storage_column(field: &FieldDefinition) -> StorageColumnSpec {
    let (column_type, nullable, default) = match field.category() {
        TypeCategory::Text => (ColumnType::Varchar { length: field.length }, field.nullable, None),
        TypeCategory::LongText => (ColumnType::Text, field.nullable, None),
        TypeCategory::Integer => (ColumnType::Integer, field.nullable, None),
        TypeCategory::BigInteger => (ColumnType::BigInt, field.nullable, None),
        TypeCategory::Boolean => {
            (ColumnType::Boolean, field.nullable, Some("false".to_string()))
        }
        TypeCategory::Date => (ColumnType::Date, true, None),
        TypeCategory::DateTime => (ColumnType::DateTime, true, None),
        TypeCategory::Decimal { precision, scale } => {
            (ColumnType::Decimal { precision, scale }, true, None)
        }
        TypeCategory::Enum { values } => (ColumnType::Enum { values }, field.nullable, None),
        TypeCategory::Unrecognized { .. } => {
            (ColumnType::Varchar { length: None }, field.nullable, None)
        }
    };
    StorageColumnSpec {
        name: field.name.clone(),
        column_type,
        nullable,
        default,
    }
}

/// Derive storage columns for a field list.
///
/// The `id` field is never redeclared: it is the implicit primary key.
pub fn storage_columns(fields: &[FieldDefinition]) -> Vec<StorageColumnSpec> {
    fields
        .iter()
        .filter(|field| field.name != "id")
        .map(storage_column)
        .collect()
}
