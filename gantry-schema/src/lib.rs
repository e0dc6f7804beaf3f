//! Field-spec parsing and type derivation for the Gantry scaffolder.
//!
//! This crate owns the first half of the scaffolding pipeline: turning a
//! terse field DSL such as `title:string,status:enum(draft,published)` into
//! normalized [`FieldDefinition`]s, and deriving the three artifact
//! specifications (storage column, validation constraints, UI affordance)
//! from them.
//!
//! All derivations classify a field through one shared [`TypeCategory`]
//! resolver, so storage, validation, and UI can never disagree about what
//! counts as numeric, enumerated, or long text.

pub mod category;
pub mod derive;
pub mod field;
pub mod parser;

pub use category::TypeCategory;
pub use derive::storage::{ColumnType, StorageColumnSpec, storage_column, storage_columns};
pub use derive::ui::{UiSnippetSpec, WidgetKind, ui_snippet, ui_snippets};
pub use derive::validation::{ValidationRule, ValidationSpec, validation_rule, validation_rules};
pub use field::FieldDefinition;
pub use parser::parse;
