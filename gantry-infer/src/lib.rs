//! Relationship inference for the Gantry scaffolder.
//!
//! Given a table name and a [`SchemaCatalog`](gantry_catalog::SchemaCatalog),
//! [`infer`] derives one-to-one, one-to-many, many-to-many, and polymorphic
//! associations purely from structural heuristics over columns, foreign
//! keys, and unique indexes. No relationship metadata is supplied by the
//! user; everything is read from the catalog at call time.

pub mod engine;
pub mod inflect;
pub mod relation;

pub use engine::infer;
pub use relation::{RelationDescriptor, RelationKind};
