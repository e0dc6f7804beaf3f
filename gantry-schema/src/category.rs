//! The shared type-category resolver.
//!
//! Every derivation (storage, validation, UI) classifies a field through
//! this one enum. The vocabulary covers both the DSL tokens users write
//! (`string`, `decimal(10,2)`) and the lowercased type names a catalog
//! reports for existing columns (`varchar`, `int4`, `timestamptz`), so
//! catalog-derived fields flow through the same derivations unchanged.

use serde::{Deserialize, Serialize};

use crate::field::FieldDefinition;

/// Precision and scale used for a `decimal` without arguments.
const DEFAULT_DECIMAL: (u32, u32) = (15, 2);

/// Semantic classification of a field's declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeCategory {
    /// Bounded string types (`string`, `varchar`, `char`).
    Text,
    /// Unbounded string types (`text`, `longtext`, `mediumtext`).
    LongText,
    /// Integer types (`integer`, `int`, `smallint`, `tinyint`).
    Integer,
    /// 64-bit integer types (`bigint`, `biginteger`).
    BigInteger,
    /// `boolean`.
    Boolean,
    /// Calendar date.
    Date,
    /// Date and time (`datetime`, `timestamp`).
    DateTime,
    /// Fixed-point numeric with precision and scale.
    Decimal {
        /// Total number of digits.
        precision: u32,
        /// Digits to the right of the decimal point.
        scale: u32,
    },
    /// Closed set of allowed values.
    Enum {
        /// Allowed values, in declaration order.
        values: Vec<String>,
    },
    /// Anything outside the vocabulary; carries the raw spec for fallback
    /// handling.
    Unrecognized {
        /// The verbatim type spec.
        raw: String,
    },
}

impl TypeCategory {
    /// Classify a field definition.
    ///
    /// Total: unknown tokens land on [`TypeCategory::Unrecognized`], never
    /// an error.
    pub fn of(field: &FieldDefinition) -> Self {
        let base = field.base_type().to_ascii_lowercase();
        match base.as_str() {
            "string" | "varchar" | "char" | "bpchar" | "character varying" | "character" => {
                Self::Text
            }
            "text" | "longtext" | "mediumtext" | "tinytext" => Self::LongText,
            "integer" | "int" | "int2" | "int4" | "smallint" | "mediumint" | "tinyint" => {
                Self::Integer
            }
            "bigint" | "biginteger" | "int8" => Self::BigInteger,
            "boolean" | "bool" => Self::Boolean,
            "date" => Self::Date,
            "datetime" | "timestamp" | "timestamptz" => Self::DateTime,
            "decimal" | "numeric" | "float" | "double" | "float4" | "float8" | "real" => {
                let args = field.type_args();
                let precision = args
                    .first()
                    .and_then(|arg| arg.parse().ok())
                    .unwrap_or(DEFAULT_DECIMAL.0);
                let scale = args
                    .get(1)
                    .and_then(|arg| arg.parse().ok())
                    .unwrap_or(DEFAULT_DECIMAL.1);
                Self::Decimal { precision, scale }
            }
            "enum" => {
                let values = field.type_args();
                if values.is_empty() {
                    // enum without values is not usable as a closed set
                    Self::Unrecognized {
                        raw: field.type_spec.clone(),
                    }
                } else {
                    Self::Enum { values }
                }
            }
            _ => Self::Unrecognized {
                raw: field.type_spec.clone(),
            },
        }
    }

    /// Whether the category maps to a numeric constraint/input.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::BigInteger | Self::Decimal { .. })
    }

    /// Whether the category is an enumeration.
    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum { .. })
    }

    /// Whether the category is unbounded text.
    pub fn is_long_text(&self) -> bool {
        matches!(self, Self::LongText)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn category(spec: &str) -> TypeCategory {
        FieldDefinition::new("f", spec).category()
    }

    #[test]
    fn dsl_tokens_resolve() {
        assert_eq!(category("string"), TypeCategory::Text);
        assert_eq!(category("text"), TypeCategory::LongText);
        assert_eq!(category("integer"), TypeCategory::Integer);
        assert_eq!(category("bigint"), TypeCategory::BigInteger);
        assert_eq!(category("boolean"), TypeCategory::Boolean);
        assert_eq!(category("date"), TypeCategory::Date);
        assert_eq!(category("datetime"), TypeCategory::DateTime);
    }

    #[test]
    fn catalog_tokens_resolve_to_the_same_categories() {
        assert_eq!(category("varchar"), TypeCategory::Text);
        assert_eq!(category("int4"), TypeCategory::Integer);
        assert_eq!(category("int8"), TypeCategory::BigInteger);
        assert_eq!(category("timestamptz"), TypeCategory::DateTime);
        assert_eq!(category("longtext"), TypeCategory::LongText);
    }

    #[test]
    fn decimal_carries_precision_and_scale() {
        assert_eq!(category("decimal(10,2)"), TypeCategory::Decimal { precision: 10, scale: 2 });
        assert_eq!(category("decimal"), TypeCategory::Decimal { precision: 15, scale: 2 });
    }

    #[test]
    fn enum_carries_values() {
        assert_eq!(
            category("enum(draft,published)"),
            TypeCategory::Enum { values: vec!["draft".into(), "published".into()] }
        );
    }

    #[test]
    fn enum_without_values_is_unrecognized() {
        assert!(matches!(category("enum"), TypeCategory::Unrecognized { .. }));
        assert!(matches!(category("enum()"), TypeCategory::Unrecognized { .. }));
    }

    #[test]
    fn unknown_token_is_unrecognized() {
        assert_eq!(
            category("geometry"),
            TypeCategory::Unrecognized { raw: "geometry".into() }
        );
    }

    #[test]
    fn category_predicates() {
        assert!(category("decimal(8,2)").is_numeric());
        assert!(category("int").is_numeric());
        assert!(category("enum(a,b)").is_enum());
        assert!(category("mediumtext").is_long_text());
        assert!(!category("string").is_numeric());
    }
}
