//! Field-source resolution.
//!
//! An explicit field-spec string always wins. Without one, an existing
//! table's columns are mapped into field definitions; when the catalog is
//! unavailable the resolver falls back to the default DSL parse rather
//! than aborting.

use tracing::{debug, warn};

use gantry_catalog::{CatalogResult, ColumnMetadata, SchemaCatalog, is_reserved_column};
use gantry_schema::{FieldDefinition, parse};

/// Resolve the field definitions for a table.
pub async fn resolve_fields(
    catalog: &dyn SchemaCatalog,
    table: &str,
    raw: Option<&str>,
) -> Vec<FieldDefinition> {
    if raw.is_some_and(|value| !value.trim().is_empty()) {
        return parse(raw);
    }
    match fields_from_table(catalog, table).await {
        Ok(fields) if !fields.is_empty() => {
            debug!(table, count = fields.len(), "fields derived from schema");
            fields
        }
        Ok(_) => parse(None),
        Err(error) => {
            warn!(table, %error, "schema introspection unavailable, using default fields");
            parse(None)
        }
    }
}

/// Map an existing table's columns into field definitions. An absent
/// table yields an empty list.
async fn fields_from_table(
    catalog: &dyn SchemaCatalog,
    table: &str,
) -> CatalogResult<Vec<FieldDefinition>> {
    if !catalog.table_exists(table).await? {
        return Ok(Vec::new());
    }
    let columns = catalog.columns(table).await?;
    Ok(columns
        .into_iter()
        .filter(|column| !is_reserved_column(&column.name))
        .map(column_to_field)
        .collect())
}

/// Map one catalog column onto the shared type vocabulary.
///
/// The lowercased catalog data type becomes the field's type spec; the
/// shared category resolver understands both DSL tokens and catalog
/// names, so the derivations treat both sources identically.
pub fn column_to_field(column: ColumnMetadata) -> FieldDefinition {
    let mut field = FieldDefinition::new(column.name, column.data_type.to_lowercase());
    field.nullable = column.nullable;
    field.length = column.max_length;
    field
}
