//! # Gantry
//!
//! CRUD scaffolding from a terse field DSL or a live database catalog.
//!
//! Gantry has two independent halves:
//! - a field-spec parser plus three pure derivations (storage column,
//!   validation constraints, UI affordance) for when fields are supplied
//!   explicitly;
//! - a catalog introspector plus a relationship-inference engine that
//!   classifies one-to-one, one-to-many, many-to-many, and polymorphic
//!   associations purely from structural heuristics.
//!
//! The rendering layer in [`codegen`] composes the two into textual
//! artifacts (DDL, model scaffold, form markup, validation rules).
//!
//! ## Quick start
//!
//! ```rust
//! use gantry::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let catalog = MemoryCatalog::new()
//!     .with_table(
//!         "users",
//!         TableFixture::new().plain_column("id", "int8"),
//!     )
//!     .with_table(
//!         "posts",
//!         TableFixture::new()
//!             .plain_column("id", "int8")
//!             .plain_column("user_id", "int8")
//!             .foreign_key("user_id", "users", "id"),
//!     );
//!
//! let relations = infer(&catalog, "users").await;
//! assert_eq!(relations[0].kind, RelationKind::HasMany);
//!
//! let fields = parse(Some("title:string,status:enum(draft,published)"));
//! assert_eq!(fields.len(), 2);
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Field-spec parsing and type derivation.
pub mod schema {
    pub use gantry_schema::*;
}

/// Catalog metadata access.
pub mod catalog {
    pub use gantry_catalog::*;
}

/// Relationship inference.
pub mod infer {
    pub use gantry_infer::*;
}

/// Artifact rendering.
pub mod codegen {
    pub use gantry_codegen::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::catalog::{
        CatalogError, CatalogResult, ColumnMetadata, MemoryCatalog, PostgresCatalog,
        SchemaCatalog, TableFixture,
    };
    pub use crate::codegen::{DdlOptions, create_table, render_model, resolve_fields};
    pub use crate::infer::{RelationDescriptor, RelationKind, infer};
    pub use crate::schema::{
        FieldDefinition, TypeCategory, parse, storage_columns, ui_snippets, validation_rules,
    };
}

pub use gantry_catalog::{CatalogError, SchemaCatalog};
pub use gantry_infer::{RelationDescriptor, RelationKind};
pub use gantry_schema::FieldDefinition;
