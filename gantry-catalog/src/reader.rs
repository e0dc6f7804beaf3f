//! The catalog query boundary.

use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::metadata::{ColumnMetadata, ForeignKeyMetadata, IncomingForeignKey, IndexMetadata};

/// Read-only queries against a relational catalog, one table at a time.
///
/// Implementations must be safe for concurrent read use; the engine never
/// writes through this trait and keeps no state between calls. All
/// failures are surfaced as [`CatalogError`](crate::CatalogError) values
/// so callers can fall back to explicit field specs.
#[async_trait]
pub trait SchemaCatalog: Send + Sync {
    /// Whether the table exists.
    async fn table_exists(&self, table: &str) -> CatalogResult<bool>;

    /// Columns of a table, in catalog ordinal order. Excludes nothing;
    /// callers filter.
    async fn columns(&self, table: &str) -> CatalogResult<Vec<ColumnMetadata>>;

    /// Foreign keys defined on `table` referencing other tables.
    async fn outgoing_foreign_keys(&self, table: &str)
    -> CatalogResult<Vec<ForeignKeyMetadata>>;

    /// Foreign keys on other tables that reference `table`.
    async fn incoming_foreign_keys(&self, table: &str)
    -> CatalogResult<Vec<IncomingForeignKey>>;

    /// All indexes on a table.
    async fn indexes(&self, table: &str) -> CatalogResult<Vec<IndexMetadata>>;

    /// Every table name in the schema. The order is whatever the catalog
    /// reports and is only suitable for display.
    async fn all_table_names(&self) -> CatalogResult<Vec<String>>;

    /// Whether some unique index covers exactly `columns`, compared as
    /// unordered sets.
    async fn unique_index_covers(&self, table: &str, columns: &[&str]) -> CatalogResult<bool> {
        let indexes = self.indexes(table).await?;
        Ok(indexes.iter().any(|index| index.is_unique && index.covers(columns)))
    }
}
