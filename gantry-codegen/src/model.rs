//! Model-scaffold rendering.
//!
//! Renders a Rust struct source scaffold for one entity: serde derives,
//! category-mapped field types, and the inferred relations summarized in
//! the doc header. The scaffold is a starting point meant to be edited,
//! not a finished module.

use gantry_infer::RelationDescriptor;
use gantry_schema::{FieldDefinition, TypeCategory};

/// Everything needed to render one model scaffold.
#[derive(Debug, Clone)]
pub struct ModelScaffold<'a> {
    /// PascalCase entity name.
    pub entity: &'a str,
    /// Backing table name.
    pub table: &'a str,
    /// Resolved field definitions.
    pub fields: &'a [FieldDefinition],
    /// Inferred relations for the table.
    pub relations: &'a [RelationDescriptor],
    /// Whether the table carries a soft-delete marker.
    pub soft_deletes: bool,
}

/// Render the model scaffold source text.
pub fn render_model(scaffold: &ModelScaffold<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "/// `{}` — scaffolded from table `{}`.\n",
        scaffold.entity, scaffold.table
    ));
    if scaffold.soft_deletes {
        out.push_str("///\n/// Soft-deleted rows keep a `deleted_at` marker.\n");
    }
    if !scaffold.relations.is_empty() {
        out.push_str("///\n/// Relations:\n");
        for relation in scaffold.relations {
            out.push_str(&format!("/// - {}\n", relation_line(relation)));
        }
    }
    out.push_str("#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]\n");
    out.push_str(&format!("pub struct {} {{\n", scaffold.entity));
    out.push_str("    pub id: i64,\n");
    for field in scaffold.fields {
        if field.name == "id" {
            continue;
        }
        out.push_str(&format!("    pub {}: {},\n", field.name, rust_type(field)));
    }
    out.push_str("}\n");
    out
}

/// One human-readable summary line per relation descriptor.
fn relation_line(relation: &RelationDescriptor) -> String {
    let mut line = format!(
        "{} {}: {}",
        relation.kind, relation.accessor, relation.related_entity
    );
    match &relation.pivot_table {
        Some(pivot) => {
            line.push_str(&format!(
                " (via `{}`, `{}` / `{}`)",
                pivot, relation.foreign_key, relation.local_key
            ));
        }
        None => {
            line.push_str(&format!(" (foreign key `{}`)", relation.foreign_key));
        }
    }
    line
}

/// Rust type for a field, per the shared category.
fn rust_type(field: &FieldDefinition) -> String {
    let base = match field.category() {
        TypeCategory::Text | TypeCategory::LongText => "String",
        TypeCategory::Integer => "i32",
        TypeCategory::BigInteger => "i64",
        TypeCategory::Boolean => "bool",
        TypeCategory::Date => "chrono::NaiveDate",
        TypeCategory::DateTime => "chrono::DateTime<chrono::Utc>",
        TypeCategory::Decimal { .. } => "rust_decimal::Decimal",
        // Enumerations and unknown types scaffold as strings.
        TypeCategory::Enum { .. } | TypeCategory::Unrecognized { .. } => "String",
    };
    if field.nullable {
        format!("Option<{base}>")
    } else {
        base.to_string()
    }
}
