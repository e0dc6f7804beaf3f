//! In-memory catalog fixtures.

use async_trait::async_trait;
use indexmap::IndexMap;

use crate::error::CatalogResult;
use crate::metadata::{ColumnMetadata, ForeignKeyMetadata, IncomingForeignKey, IndexMetadata};
use crate::reader::SchemaCatalog;

/// One table's fixture data.
#[derive(Debug, Clone, Default)]
pub struct TableFixture {
    columns: Vec<ColumnMetadata>,
    foreign_keys: Vec<ForeignKeyMetadata>,
    indexes: Vec<IndexMetadata>,
}

impl TableFixture {
    /// Create an empty fixture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column. Insertion order is the catalog ordinal order.
    pub fn column(mut self, column: ColumnMetadata) -> Self {
        self.columns.push(column);
        self
    }

    /// Append a non-nullable column by name and data type.
    pub fn plain_column(self, name: &str, data_type: &str) -> Self {
        self.column(ColumnMetadata::new(name, data_type))
    }

    /// Append an outgoing foreign key.
    pub fn foreign_key(mut self, column: &str, referenced_table: &str, referenced_column: &str) -> Self {
        self.foreign_keys
            .push(ForeignKeyMetadata::new(column, referenced_table, referenced_column));
        self
    }

    /// Append a unique index over the given columns.
    pub fn unique_index(mut self, name: &str, columns: &[&str]) -> Self {
        self.indexes.push(IndexMetadata::new(
            name,
            columns.iter().map(|c| c.to_string()).collect(),
            true,
        ));
        self
    }

    /// Append a non-unique index over the given columns.
    pub fn index(mut self, name: &str, columns: &[&str]) -> Self {
        self.indexes.push(IndexMetadata::new(
            name,
            columns.iter().map(|c| c.to_string()).collect(),
            false,
        ));
        self
    }
}

/// An ordered, read-only snapshot of a whole schema.
///
/// This is the fixture form of [`SchemaCatalog`]: the inference heuristics
/// stay pure functions of their inputs, and tests assemble a snapshot with
/// the builder API instead of a live connection. Queries never fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    tables: IndexMap<String, TableFixture>,
}

impl MemoryCatalog {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table fixture. Insertion order is the catalog listing order.
    pub fn with_table(mut self, name: &str, fixture: TableFixture) -> Self {
        self.tables.insert(name.to_string(), fixture);
        self
    }
}

#[async_trait]
impl SchemaCatalog for MemoryCatalog {
    async fn table_exists(&self, table: &str) -> CatalogResult<bool> {
        Ok(self.tables.contains_key(table))
    }

    async fn columns(&self, table: &str) -> CatalogResult<Vec<ColumnMetadata>> {
        Ok(self
            .tables
            .get(table)
            .map(|fixture| fixture.columns.clone())
            .unwrap_or_default())
    }

    async fn outgoing_foreign_keys(&self, table: &str) -> CatalogResult<Vec<ForeignKeyMetadata>> {
        Ok(self
            .tables
            .get(table)
            .map(|fixture| fixture.foreign_keys.clone())
            .unwrap_or_default())
    }

    async fn incoming_foreign_keys(&self, table: &str) -> CatalogResult<Vec<IncomingForeignKey>> {
        let mut incoming = Vec::new();
        for (name, fixture) in &self.tables {
            for fk in &fixture.foreign_keys {
                if fk.referenced_table == table {
                    incoming.push(IncomingForeignKey {
                        source_table: name.clone(),
                        column: fk.source_column.clone(),
                    });
                }
            }
        }
        Ok(incoming)
    }

    async fn indexes(&self, table: &str) -> CatalogResult<Vec<IndexMetadata>> {
        Ok(self
            .tables
            .get(table)
            .map(|fixture| fixture.indexes.clone())
            .unwrap_or_default())
    }

    async fn all_table_names(&self) -> CatalogResult<Vec<String>> {
        Ok(self.tables.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fixture_catalog() -> MemoryCatalog {
        MemoryCatalog::new()
            .with_table(
                "users",
                TableFixture::new()
                    .plain_column("id", "int8")
                    .plain_column("email", "varchar")
                    .unique_index("users_email_ux", &["email"]),
            )
            .with_table(
                "posts",
                TableFixture::new()
                    .plain_column("id", "int8")
                    .plain_column("user_id", "int8")
                    .foreign_key("user_id", "users", "id"),
            )
    }

    #[tokio::test]
    async fn table_existence() {
        let catalog = fixture_catalog();
        assert!(catalog.table_exists("users").await.unwrap());
        assert!(!catalog.table_exists("missing").await.unwrap());
    }

    #[tokio::test]
    async fn incoming_keys_scan_the_snapshot() {
        let catalog = fixture_catalog();
        let incoming = catalog.incoming_foreign_keys("users").await.unwrap();
        assert_eq!(incoming.len(), 1);
        assert_eq!(incoming[0].source_table, "posts");
        assert_eq!(incoming[0].column, "user_id");
    }

    #[tokio::test]
    async fn unique_cover_is_order_insensitive() {
        let catalog = MemoryCatalog::new().with_table(
            "images",
            TableFixture::new().unique_index("ux", &["imageable_type", "imageable_id"]),
        );
        assert!(
            catalog
                .unique_index_covers("images", &["imageable_id", "imageable_type"])
                .await
                .unwrap()
        );
        assert!(
            !catalog
                .unique_index_covers("images", &["imageable_id"])
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn table_names_preserve_insertion_order() {
        let names = fixture_catalog().all_table_names().await.unwrap();
        assert_eq!(names, vec!["users", "posts"]);
    }
}
