//! Catalog introspection for the Gantry scaffolder.
//!
//! This crate is the read-only query boundary against a relational
//! catalog: columns, foreign keys, and indexes for one schema at a time.
//! It performs no inference of its own; the relationship heuristics in
//! `gantry-infer` consume these snapshots.
//!
//! Two implementations of the [`SchemaCatalog`] trait ship here:
//! [`MemoryCatalog`], an ordered in-memory fixture snapshot used by every
//! test, and [`PostgresCatalog`], which reads a live PostgreSQL
//! information schema.
//!
//! Nothing is cached between calls: a later query may observe a changed
//! schema, and correctness depends only on the catalog state at call time.

pub mod error;
pub mod memory;
pub mod metadata;
pub mod postgres;
pub mod reader;

pub use error::{CatalogError, CatalogResult};
pub use memory::{MemoryCatalog, TableFixture};
pub use metadata::{
    ColumnMetadata, ForeignKeyMetadata, IncomingForeignKey, IndexMetadata, fillable_fields,
    has_soft_deletes, has_timestamps, is_reserved_column,
};
pub use postgres::PostgresCatalog;
pub use reader::SchemaCatalog;
