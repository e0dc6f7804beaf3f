//! SQL DDL rendering from storage-column specs.

use gantry_schema::{ColumnType, StorageColumnSpec};

/// Options for the generated CREATE TABLE.
#[derive(Debug, Clone, Copy, Default)]
pub struct DdlOptions {
    /// Add `created_at`/`updated_at` columns.
    pub timestamps: bool,
    /// Add a `deleted_at` soft-delete column.
    pub soft_deletes: bool,
}

/// Render a CREATE TABLE statement.
///
/// The `id` primary key is implicit and always emitted first; the storage
/// specs never redeclare it.
pub fn create_table(table: &str, columns: &[StorageColumnSpec], options: DdlOptions) -> String {
    let mut lines = vec!["    \"id\" BIGSERIAL PRIMARY KEY".to_string()];
    for column in columns {
        lines.push(format!("    {}", render_column(column)));
    }
    if options.timestamps {
        lines.push("    \"created_at\" TIMESTAMPTZ".to_string());
        lines.push("    \"updated_at\" TIMESTAMPTZ".to_string());
    }
    if options.soft_deletes {
        lines.push("    \"deleted_at\" TIMESTAMPTZ".to_string());
    }
    format!("CREATE TABLE \"{}\" (\n{}\n);", table, lines.join(",\n"))
}

fn render_column(column: &StorageColumnSpec) -> String {
    let mut sql = format!("\"{}\" {}", column.name, sql_type(&column.column_type));
    if let ColumnType::Enum { values } = &column.column_type {
        let list = values
            .iter()
            .map(|value| format!("'{value}'"))
            .collect::<Vec<_>>()
            .join(", ");
        sql.push_str(&format!(" CHECK (\"{}\" IN ({list}))", column.name));
    }
    if !column.nullable {
        sql.push_str(" NOT NULL");
    }
    if let Some(default) = &column.default {
        sql.push_str(&format!(" DEFAULT {default}"));
    }
    sql
}

fn sql_type(column_type: &ColumnType) -> String {
    match column_type {
        ColumnType::Varchar { length } => format!("VARCHAR({})", length.unwrap_or(255)),
        ColumnType::Text => "TEXT".to_string(),
        ColumnType::Integer => "INTEGER".to_string(),
        ColumnType::BigInt => "BIGINT".to_string(),
        ColumnType::Boolean => "BOOLEAN".to_string(),
        ColumnType::Date => "DATE".to_string(),
        ColumnType::DateTime => "TIMESTAMPTZ".to_string(),
        ColumnType::Decimal { precision, scale } => format!("DECIMAL({precision},{scale})"),
        // Enums store as text; the CHECK constraint carries the value set.
        ColumnType::Enum { .. } => "TEXT".to_string(),
    }
}
