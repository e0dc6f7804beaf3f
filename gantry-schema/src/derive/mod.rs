//! The three artifact derivations.
//!
//! Each function is total: every field definition maps to a spec, with a
//! defined fallback for unrecognized type tokens. The functions share the
//! [`TypeCategory`](crate::category::TypeCategory) resolver and never
//! render output text themselves; rendering belongs to `gantry-codegen`.

pub mod storage;
pub mod ui;
pub mod validation;
