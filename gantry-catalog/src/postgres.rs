//! PostgreSQL-backed catalog reader.

use async_trait::async_trait;
use tokio_postgres::{Client, NoTls, Row};
use tracing::{debug, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::metadata::{ColumnMetadata, ForeignKeyMetadata, IncomingForeignKey, IndexMetadata};
use crate::reader::SchemaCatalog;

/// Catalog reader over a live PostgreSQL connection.
///
/// Reads standard information-schema and pg_catalog metadata for one
/// database schema (default `public`). Column data types are reported as
/// lowercased udt names (`varchar`, `int4`, `timestamptz`), which the
/// shared type-category resolver understands directly.
pub struct PostgresCatalog {
    client: Client,
    schema: String,
}

impl PostgresCatalog {
    /// Connect with the given connection string, introspecting `public`.
    ///
    /// The connection task is driven in the background; a dropped
    /// connection surfaces as a query error on the next call.
    pub async fn connect(conn_str: &str) -> CatalogResult<Self> {
        let (client, connection) = tokio_postgres::connect(conn_str, NoTls)
            .await
            .map_err(CatalogError::Connection)?;
        tokio::spawn(async move {
            if let Err(err) = connection.await {
                warn!(error = %err, "catalog connection closed");
            }
        });
        Ok(Self::from_client(client))
    }

    /// Wrap an already-established client.
    pub fn from_client(client: Client) -> Self {
        Self {
            client,
            schema: "public".to_string(),
        }
    }

    /// Introspect a different database schema.
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    async fn query(&self, sql: &str, params: &[&(dyn tokio_postgres::types::ToSql + Sync)])
    -> CatalogResult<Vec<Row>> {
        debug!(sql, "catalog query");
        Ok(self.client.query(sql, params).await?)
    }
}

#[async_trait]
impl SchemaCatalog for PostgresCatalog {
    async fn table_exists(&self, table: &str) -> CatalogResult<bool> {
        let row = self
            .client
            .query_one(queries::TABLE_EXISTS, &[&self.schema, &table])
            .await?;
        Ok(row.get(0))
    }

    async fn columns(&self, table: &str) -> CatalogResult<Vec<ColumnMetadata>> {
        let rows = self.query(queries::COLUMNS, &[&self.schema, &table]).await?;
        Ok(rows
            .iter()
            .map(|row| {
                let max_length: Option<i32> = row.get("character_maximum_length");
                ColumnMetadata {
                    name: row.get("column_name"),
                    data_type: row.get::<_, String>("udt_name").to_lowercase(),
                    nullable: row.get("is_nullable"),
                    max_length: max_length.and_then(|len| u32::try_from(len).ok()),
                }
            })
            .collect())
    }

    async fn outgoing_foreign_keys(&self, table: &str) -> CatalogResult<Vec<ForeignKeyMetadata>> {
        let rows = self
            .query(queries::OUTGOING_FOREIGN_KEYS, &[&self.schema, &table])
            .await?;
        Ok(rows
            .iter()
            .map(|row| ForeignKeyMetadata {
                source_column: row.get("column_name"),
                referenced_table: row.get("referenced_table"),
                referenced_column: row.get("referenced_column"),
            })
            .collect())
    }

    async fn incoming_foreign_keys(&self, table: &str) -> CatalogResult<Vec<IncomingForeignKey>> {
        let rows = self
            .query(queries::INCOMING_FOREIGN_KEYS, &[&self.schema, &table])
            .await?;
        Ok(rows
            .iter()
            .map(|row| IncomingForeignKey {
                source_table: row.get("source_table"),
                column: row.get("column_name"),
            })
            .collect())
    }

    async fn indexes(&self, table: &str) -> CatalogResult<Vec<IndexMetadata>> {
        let rows = self.query(queries::INDEXES, &[&self.schema, &table]).await?;
        Ok(rows
            .iter()
            .map(|row| IndexMetadata {
                index_name: row.get("index_name"),
                columns: row.get("columns"),
                is_unique: row.get("is_unique"),
            })
            .collect())
    }

    async fn all_table_names(&self) -> CatalogResult<Vec<String>> {
        let rows = self.query(queries::TABLES, &[&self.schema]).await?;
        Ok(rows.iter().map(|row| row.get("table_name")).collect())
    }
}

/// Metadata queries against information_schema / pg_catalog.
mod queries {
    /// Whether a table exists in the schema.
    pub const TABLE_EXISTS: &str = r#"
        SELECT EXISTS (
            SELECT 1
            FROM information_schema.tables
            WHERE table_schema = $1 AND table_name = $2
        )
    "#;

    /// Columns of a table, in ordinal order.
    pub const COLUMNS: &str = r#"
        SELECT
            column_name,
            udt_name,
            is_nullable = 'YES' AS is_nullable,
            character_maximum_length
        FROM information_schema.columns
        WHERE table_schema = $1 AND table_name = $2
        ORDER BY ordinal_position
    "#;

    /// Foreign keys defined on a table.
    pub const OUTGOING_FOREIGN_KEYS: &str = r#"
        SELECT
            kcu.column_name,
            ccu.table_name AS referenced_table,
            ccu.column_name AS referenced_column
        FROM information_schema.table_constraints tc
        JOIN information_schema.key_column_usage kcu
            ON tc.constraint_name = kcu.constraint_name
            AND tc.table_schema = kcu.table_schema
        JOIN information_schema.constraint_column_usage ccu
            ON tc.constraint_name = ccu.constraint_name
            AND tc.table_schema = ccu.table_schema
        WHERE tc.table_schema = $1
            AND tc.table_name = $2
            AND tc.constraint_type = 'FOREIGN KEY'
        ORDER BY kcu.ordinal_position
    "#;

    /// Foreign keys on other tables referencing a table.
    pub const INCOMING_FOREIGN_KEYS: &str = r#"
        SELECT
            tc.table_name AS source_table,
            kcu.column_name
        FROM information_schema.table_constraints tc
        JOIN information_schema.key_column_usage kcu
            ON tc.constraint_name = kcu.constraint_name
            AND tc.table_schema = kcu.table_schema
        JOIN information_schema.constraint_column_usage ccu
            ON tc.constraint_name = ccu.constraint_name
            AND tc.table_schema = ccu.table_schema
        WHERE tc.table_schema = $1
            AND tc.constraint_type = 'FOREIGN KEY'
            AND ccu.table_name = $2
        ORDER BY tc.table_name, kcu.ordinal_position
    "#;

    /// Indexes of a table with their ordered column lists.
    pub const INDEXES: &str = r#"
        SELECT
            i.relname AS index_name,
            array_agg(a.attname ORDER BY array_position(ix.indkey, a.attnum)) AS columns,
            ix.indisunique AS is_unique
        FROM pg_index ix
        JOIN pg_class i ON ix.indexrelid = i.oid
        JOIN pg_class t ON ix.indrelid = t.oid
        JOIN pg_namespace n ON t.relnamespace = n.oid
        JOIN pg_attribute a ON a.attrelid = t.oid AND a.attnum = ANY(ix.indkey)
        WHERE n.nspname = $1 AND t.relname = $2
        GROUP BY i.relname, ix.indisunique
    "#;

    /// All base tables in the schema.
    pub const TABLES: &str = r#"
        SELECT table_name
        FROM information_schema.tables
        WHERE table_schema = $1 AND table_type = 'BASE TABLE'
        ORDER BY table_name
    "#;
}
