//! Artifact rendering for the Gantry scaffolder.
//!
//! This crate is the emission boundary: it consumes the structured
//! outputs of `gantry-schema`, `gantry-catalog`, and `gantry-infer` and
//! turns them into textual artifacts — SQL DDL, a model scaffold, form
//! markup, and a validation-rule document. It makes no decisions of its
//! own about types or relations; everything is pattern-matched off the
//! core's descriptors.
//!
//! Writing the rendered text to disk, patching routes, and command-line
//! handling all live outside this workspace.

pub mod fields;
pub mod form;
pub mod model;
pub mod rules;
pub mod sql;

pub use fields::{column_to_field, resolve_fields};
pub use form::{render_detail_list, render_form};
pub use model::{ModelScaffold, render_model};
pub use rules::{render_rules, rule_token};
pub use sql::{DdlOptions, create_table};
