//! Field definitions produced by the field-spec parser.

use serde::{Deserialize, Serialize};

use crate::category::TypeCategory;

/// A single field, parsed from the field-spec DSL or synthesized from a
/// catalog column.
///
/// The type spec is stored verbatim, including any parenthesized argument
/// list (e.g. `enum(draft,published)` or `decimal(10,2)`); the parser is a
/// pure tokenizer with no type-semantics knowledge. Splitting the spec into
/// a base token and arguments happens lazily through [`base_type`] and
/// [`type_args`].
///
/// [`base_type`]: Self::base_type
/// [`type_args`]: Self::type_args
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name. Non-empty after trimming.
    pub name: String,
    /// Raw type spec as written, e.g. `string` or `decimal(10,2)`.
    pub type_spec: String,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Maximum character length, when known.
    pub length: Option<u32>,
}

impl FieldDefinition {
    /// Create a field with the default flags (not nullable, no length).
    pub fn new(name: impl Into<String>, type_spec: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_spec: type_spec.into(),
            nullable: false,
            length: None,
        }
    }

    /// Set the nullable flag.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Set the maximum character length.
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// The type token before any parenthesized arguments.
    pub fn base_type(&self) -> &str {
        match self.type_spec.find('(') {
            Some(pos) => self.type_spec[..pos].trim(),
            None => self.type_spec.trim(),
        }
    }

    /// The parenthesized argument list, split on `,` or `|`.
    ///
    /// `enum(a|b,c)` yields `["a", "b", "c"]`; a spec without arguments
    /// yields an empty list. Argument order is preserved.
    pub fn type_args(&self) -> Vec<String> {
        let Some(open) = self.type_spec.find('(') else {
            return Vec::new();
        };
        let inner = self.type_spec[open + 1..].trim_end().trim_end_matches(')');
        inner
            .split(['|', ','])
            .map(str::trim)
            .filter(|arg| !arg.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Resolve the shared type category for this field.
    pub fn category(&self) -> TypeCategory {
        TypeCategory::of(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn base_type_strips_argument_list() {
        assert_eq!(FieldDefinition::new("price", "decimal(10,2)").base_type(), "decimal");
        assert_eq!(FieldDefinition::new("title", "string").base_type(), "string");
    }

    #[test]
    fn type_args_preserve_order() {
        let field = FieldDefinition::new("status", "enum(draft,published,archived)");
        assert_eq!(field.type_args(), vec!["draft", "published", "archived"]);
    }

    #[test]
    fn type_args_split_on_pipes_too() {
        let field = FieldDefinition::new("status", "enum(a|b|c)");
        assert_eq!(field.type_args(), vec!["a", "b", "c"]);
    }

    #[test]
    fn type_args_trim_whitespace_and_drop_empties() {
        let field = FieldDefinition::new("status", "enum( a , , b )");
        assert_eq!(field.type_args(), vec!["a", "b"]);
    }

    #[test]
    fn type_args_empty_without_parens() {
        assert!(FieldDefinition::new("title", "string").type_args().is_empty());
    }

    #[test]
    fn builder_flags() {
        let field = FieldDefinition::new("title", "string").nullable(true).with_length(120);
        assert!(field.nullable);
        assert_eq!(field.length, Some(120));
    }
}
