//! Naming helpers for tables, entities, and accessors.
//!
//! The rules are the common English heuristics; irregular nouns are out of
//! scope, matching how table names are conventionally chosen.

use convert_case::{Case, Casing};

/// Singularize a lowercase table-ish name.
pub fn singularize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    if ["ses", "xes", "zes", "ches", "shes"]
        .iter()
        .any(|suffix| name.ends_with(suffix))
    {
        return name[..name.len() - 2].to_string();
    }
    if name.ends_with('s') && !name.ends_with("ss") {
        return name[..name.len() - 1].to_string();
    }
    name.to_string()
}

/// Pluralize a lowercase name.
pub fn pluralize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix('y') {
        if stem.chars().last().is_some_and(|c| !"aeiou".contains(c)) {
            return format!("{stem}ies");
        }
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|suffix| name.ends_with(suffix)) {
        return format!("{name}es");
    }
    format!("{name}s")
}

/// PascalCase entity name for a table: hyphens and spaces normalize to
/// underscores, the name is singularized, then cased. `user_profiles`
/// becomes `UserProfile`.
pub fn entity_name(table: &str) -> String {
    let normalized = table.replace(['-', ' '], "_");
    singularize(&normalized).to_case(Case::Pascal)
}

/// Conventional table name for an entity: snake_case, pluralized.
pub fn table_name(entity: &str) -> String {
    pluralize(&entity.to_case(Case::Snake))
}

/// Accessor for a single related row: snake-cased singular entity.
pub fn singular_accessor(entity: &str) -> String {
    entity.to_case(Case::Snake)
}

/// Accessor for a collection: snake-cased plural entity.
pub fn plural_accessor(entity: &str) -> String {
    pluralize(&entity.to_case(Case::Snake))
}
