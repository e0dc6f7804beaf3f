//! Relation descriptors, the structured output of inference.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// The kind of association a descriptor names.
///
/// These tokens, together with the descriptor field names, are the stable
/// contract the rendering layer pattern-matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// The subject table holds the foreign key.
    BelongsTo,
    /// One related row, guarded by a unique index on the incoming key.
    HasOne,
    /// Many related rows through an incoming foreign key.
    HasMany,
    /// Many-to-many through a pivot table.
    BelongsToMany,
    /// The subject table points at heterogeneous targets via a morph pair.
    MorphTo,
    /// One related row referencing the subject via a morph pair.
    MorphOne,
    /// Many related rows referencing the subject via a morph pair.
    MorphMany,
}

impl RelationKind {
    /// Whether the accessor yields a collection.
    pub fn is_to_many(&self) -> bool {
        matches!(self, Self::HasMany | Self::BelongsToMany | Self::MorphMany)
    }

    /// Whether the accessor yields at most one row.
    pub fn is_to_one(&self) -> bool {
        !self.is_to_many()
    }

    /// Stable token used in rendered artifacts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BelongsTo => "belongs_to",
            Self::HasOne => "has_one",
            Self::HasMany => "has_many",
            Self::BelongsToMany => "belongs_to_many",
            Self::MorphTo => "morph_to",
            Self::MorphOne => "morph_one",
            Self::MorphMany => "morph_many",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One discovered association and how to address it.
///
/// Immutable once built; descriptors are de-duplicated by accessor name
/// within one inference run, so no two descriptors collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationDescriptor {
    /// Derived accessor name, unique within one inference run.
    pub accessor: SmolStr,
    /// Association kind.
    pub kind: RelationKind,
    /// PascalCase entity name of the related table. For `morph_to` this
    /// names the abstract target (`Commentable`), not a concrete entity.
    pub related_entity: SmolStr,
    /// Key on the subject side: the referenced column for `belongs_to`,
    /// `id` for incoming rows, the related-side pivot column for
    /// `belongs_to_many`, the `{base}_type` column for `morph_to`.
    pub local_key: SmolStr,
    /// Key on the owning side of the association.
    pub foreign_key: SmolStr,
    /// Junction table, for many-to-many associations.
    pub pivot_table: Option<SmolStr>,
    /// Base name of the `{base}_type`/`{base}_id` pair, for polymorphic
    /// kinds.
    pub morph_name: Option<SmolStr>,
}

impl RelationDescriptor {
    /// A `belongs_to` descriptor for an outgoing foreign key.
    pub fn belongs_to(
        accessor: impl Into<SmolStr>,
        related_entity: impl Into<SmolStr>,
        foreign_key: impl Into<SmolStr>,
        local_key: impl Into<SmolStr>,
    ) -> Self {
        Self {
            accessor: accessor.into(),
            kind: RelationKind::BelongsTo,
            related_entity: related_entity.into(),
            local_key: local_key.into(),
            foreign_key: foreign_key.into(),
            pivot_table: None,
            morph_name: None,
        }
    }

    /// A `has_one` descriptor for a uniquely-indexed incoming key.
    pub fn has_one(
        accessor: impl Into<SmolStr>,
        related_entity: impl Into<SmolStr>,
        foreign_key: impl Into<SmolStr>,
    ) -> Self {
        Self {
            accessor: accessor.into(),
            kind: RelationKind::HasOne,
            related_entity: related_entity.into(),
            local_key: SmolStr::new_static("id"),
            foreign_key: foreign_key.into(),
            pivot_table: None,
            morph_name: None,
        }
    }

    /// A `has_many` descriptor for an incoming key.
    pub fn has_many(
        accessor: impl Into<SmolStr>,
        related_entity: impl Into<SmolStr>,
        foreign_key: impl Into<SmolStr>,
    ) -> Self {
        Self {
            kind: RelationKind::HasMany,
            ..Self::has_one(accessor, related_entity, foreign_key)
        }
    }

    /// A `belongs_to_many` descriptor through a pivot table. `foreign_key`
    /// is the pivot column referencing the subject, `related_key` the one
    /// referencing the related table.
    pub fn belongs_to_many(
        accessor: impl Into<SmolStr>,
        related_entity: impl Into<SmolStr>,
        pivot_table: impl Into<SmolStr>,
        foreign_key: impl Into<SmolStr>,
        related_key: impl Into<SmolStr>,
    ) -> Self {
        Self {
            accessor: accessor.into(),
            kind: RelationKind::BelongsToMany,
            related_entity: related_entity.into(),
            local_key: related_key.into(),
            foreign_key: foreign_key.into(),
            pivot_table: Some(pivot_table.into()),
            morph_name: None,
        }
    }

    /// A `morph_to` descriptor for a local morph pair.
    pub fn morph_to(
        accessor: impl Into<SmolStr>,
        related_entity: impl Into<SmolStr>,
        morph_name: impl Into<SmolStr>,
        type_column: impl Into<SmolStr>,
        id_column: impl Into<SmolStr>,
    ) -> Self {
        Self {
            accessor: accessor.into(),
            kind: RelationKind::MorphTo,
            related_entity: related_entity.into(),
            local_key: type_column.into(),
            foreign_key: id_column.into(),
            pivot_table: None,
            morph_name: Some(morph_name.into()),
        }
    }

    /// A `morph_one` descriptor for a uniquely-indexed incoming morph pair.
    pub fn morph_one(
        accessor: impl Into<SmolStr>,
        related_entity: impl Into<SmolStr>,
        morph_name: impl Into<SmolStr>,
        foreign_key: impl Into<SmolStr>,
    ) -> Self {
        Self {
            accessor: accessor.into(),
            kind: RelationKind::MorphOne,
            related_entity: related_entity.into(),
            local_key: SmolStr::new_static("id"),
            foreign_key: foreign_key.into(),
            pivot_table: None,
            morph_name: Some(morph_name.into()),
        }
    }

    /// A `morph_many` descriptor for an incoming morph pair.
    pub fn morph_many(
        accessor: impl Into<SmolStr>,
        related_entity: impl Into<SmolStr>,
        morph_name: impl Into<SmolStr>,
        foreign_key: impl Into<SmolStr>,
    ) -> Self {
        Self {
            kind: RelationKind::MorphMany,
            ..Self::morph_one(accessor, related_entity, morph_name, foreign_key)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn kind_cardinality() {
        assert!(RelationKind::HasMany.is_to_many());
        assert!(RelationKind::BelongsToMany.is_to_many());
        assert!(RelationKind::MorphMany.is_to_many());
        assert!(RelationKind::HasOne.is_to_one());
        assert!(RelationKind::BelongsTo.is_to_one());
        assert!(RelationKind::MorphTo.is_to_one());
    }

    #[test]
    fn kind_tokens_are_stable() {
        assert_eq!(RelationKind::BelongsToMany.as_str(), "belongs_to_many");
        assert_eq!(RelationKind::MorphTo.to_string(), "morph_to");
    }

    #[test]
    fn belongs_to_many_records_both_pivot_columns() {
        let descriptor =
            RelationDescriptor::belongs_to_many("tags", "Tag", "post_tag", "post_id", "tag_id");
        assert_eq!(descriptor.pivot_table.as_deref(), Some("post_tag"));
        assert_eq!(descriptor.foreign_key, "post_id");
        assert_eq!(descriptor.local_key, "tag_id");
    }

    #[test]
    fn incoming_kinds_anchor_on_id() {
        let descriptor = RelationDescriptor::has_many("posts", "Post", "user_id");
        assert_eq!(descriptor.local_key, "id");
        assert_eq!(descriptor.foreign_key, "user_id");
    }
}
