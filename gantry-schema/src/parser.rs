//! Parser for the terse field-spec DSL.
//!
//! Grammar: fields are comma-separated; each field is `name[:type]` where
//! the type may carry one level of parenthesized arguments. Commas and
//! pipes inside the parentheses belong to the argument list, so
//! `price:decimal(10,2),status:enum(a,b)` is exactly two fields.

use crate::field::FieldDefinition;

/// Type token used when an entry omits its type spec.
const DEFAULT_TYPE: &str = "string";

/// Parse a raw field-spec string into ordered field definitions.
///
/// An empty or absent spec yields the single default `name:string` field,
/// so downstream generation never receives zero fields. Empty entries
/// (trailing commas, stray whitespace) and entries whose name trims to
/// nothing are discarded silently.
///
/// Parsing is deterministic: the same input always yields the same
/// order-preserving output.
pub fn parse(raw: Option<&str>) -> Vec<FieldDefinition> {
    let raw = match raw {
        Some(value) if !value.trim().is_empty() => value,
        _ => return vec![FieldDefinition::new("name", DEFAULT_TYPE)],
    };

    let mut fields = Vec::new();
    for entry in split_top_level(raw) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let (name, type_spec) = match entry.split_once(':') {
            Some((name, spec)) => {
                let spec = spec.trim();
                (name.trim(), if spec.is_empty() { DEFAULT_TYPE } else { spec })
            }
            None => (entry, DEFAULT_TYPE),
        };
        if name.is_empty() {
            continue;
        }
        fields.push(FieldDefinition::new(name, type_spec));
    }
    fields
}

/// Split on commas that sit outside any parenthesized argument list.
///
/// The grammar allows a single nesting level; the depth counter still
/// balances deeper pairs rather than misreading them as field boundaries.
fn split_top_level(raw: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (index, ch) in raw.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&raw[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&raw[start..]);
    parts
}
