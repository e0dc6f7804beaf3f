//! The relationship-inference engine.

use std::collections::HashSet;

use convert_case::{Case, Casing};
use smol_str::SmolStr;
use tracing::{debug, warn};

use gantry_catalog::{CatalogResult, ColumnMetadata, SchemaCatalog};

use crate::inflect;
use crate::relation::RelationDescriptor;

/// Infer every structural relationship for `table`.
///
/// The heuristics run in fixed precedence order: belongs-to, then
/// has-one/has-many, then belongs-to-many, then morph-to, then
/// morph-one/morph-many. The first heuristic to claim an accessor name
/// wins; later proposals under the same name are dropped.
///
/// A failing catalog query removes only that heuristic's contribution —
/// the result is the union of whatever heuristics succeeded, which may be
/// empty. Within one heuristic, candidates follow catalog order; that
/// order is only suitable for display.
pub async fn infer(catalog: &dyn SchemaCatalog, table: &str) -> Vec<RelationDescriptor> {
    let mut descriptors = Vec::new();
    let mut claimed: HashSet<SmolStr> = HashSet::new();

    let passes = [
        ("belongs_to", belongs_to(catalog, table).await),
        ("has_one_or_many", incoming_keys(catalog, table).await),
        ("belongs_to_many", pivots(catalog, table).await),
        ("morph_to", local_morphs(catalog, table).await),
        ("morph_one_or_many", incoming_morphs(catalog, table).await),
    ];
    for (heuristic, outcome) in passes {
        match outcome {
            Ok(found) => claim(&mut descriptors, &mut claimed, found),
            Err(error) => {
                warn!(table, heuristic, %error, "heuristic skipped");
            }
        }
    }

    debug!(table, count = descriptors.len(), "inference finished");
    descriptors
}

fn claim(
    out: &mut Vec<RelationDescriptor>,
    claimed: &mut HashSet<SmolStr>,
    found: Vec<RelationDescriptor>,
) {
    for descriptor in found {
        if claimed.insert(descriptor.accessor.clone()) {
            out.push(descriptor);
        }
    }
}

/// One descriptor per outgoing foreign key; the accessor is the key column
/// minus its `_id` suffix.
async fn belongs_to(
    catalog: &dyn SchemaCatalog,
    table: &str,
) -> CatalogResult<Vec<RelationDescriptor>> {
    let keys = catalog.outgoing_foreign_keys(table).await?;
    Ok(keys
        .into_iter()
        .map(|fk| {
            let accessor = fk
                .source_column
                .strip_suffix("_id")
                .unwrap_or(&fk.source_column)
                .to_string();
            RelationDescriptor::belongs_to(
                accessor,
                inflect::entity_name(&fk.referenced_table),
                fk.source_column.clone(),
                fk.referenced_column,
            )
        })
        .collect())
}

/// Incoming foreign keys split on uniqueness: a unique index over the
/// referencing column means at most one related row.
async fn incoming_keys(
    catalog: &dyn SchemaCatalog,
    table: &str,
) -> CatalogResult<Vec<RelationDescriptor>> {
    let mut found = Vec::new();
    for incoming in catalog.incoming_foreign_keys(table).await? {
        let unique = catalog
            .unique_index_covers(&incoming.source_table, &[&incoming.column])
            .await?;
        let entity = inflect::entity_name(&incoming.source_table);
        let descriptor = if unique {
            RelationDescriptor::has_one(
                inflect::singular_accessor(&entity),
                entity.clone(),
                incoming.column,
            )
        } else {
            RelationDescriptor::has_many(
                inflect::plural_accessor(&entity),
                entity.clone(),
                incoming.column,
            )
        };
        found.push(descriptor);
    }
    Ok(found)
}

/// Pivot detection: a two-part underscore table name (either order) whose
/// exactly two outgoing foreign keys reference the subject table and one
/// distinct other table.
async fn pivots(
    catalog: &dyn SchemaCatalog,
    table: &str,
) -> CatalogResult<Vec<RelationDescriptor>> {
    let mut found = Vec::new();
    for candidate in catalog.all_table_names().await? {
        if candidate == table || candidate.split('_').count() != 2 {
            continue;
        }
        let keys = catalog.outgoing_foreign_keys(&candidate).await?;
        if keys.len() != 2 || keys[0].referenced_table == keys[1].referenced_table {
            continue;
        }
        let (own, other) = if keys[0].referenced_table == table {
            (&keys[0], &keys[1])
        } else if keys[1].referenced_table == table {
            (&keys[1], &keys[0])
        } else {
            continue;
        };
        let entity = inflect::entity_name(&other.referenced_table);
        found.push(RelationDescriptor::belongs_to_many(
            inflect::plural_accessor(&entity),
            entity,
            candidate.clone(),
            own.source_column.clone(),
            other.source_column.clone(),
        ));
    }
    Ok(found)
}

/// One descriptor per local `{base}_type`/`{base}_id` pair.
async fn local_morphs(
    catalog: &dyn SchemaCatalog,
    table: &str,
) -> CatalogResult<Vec<RelationDescriptor>> {
    let columns = catalog.columns(table).await?;
    Ok(morph_pairs(&columns)
        .into_iter()
        .map(|pair| {
            RelationDescriptor::morph_to(
                pair.base.clone(),
                pair.base.to_case(Case::Pascal),
                pair.base.clone(),
                pair.type_column,
                pair.id_column,
            )
        })
        .collect())
}

/// Morph pairs on every other table, split on whether a unique index
/// covers the `{type, id}` pair.
async fn incoming_morphs(
    catalog: &dyn SchemaCatalog,
    table: &str,
) -> CatalogResult<Vec<RelationDescriptor>> {
    let mut found = Vec::new();
    for other in catalog.all_table_names().await? {
        if other == table {
            continue;
        }
        let columns = catalog.columns(&other).await?;
        for pair in morph_pairs(&columns) {
            let unique = catalog
                .unique_index_covers(&other, &[&pair.type_column, &pair.id_column])
                .await?;
            let entity = inflect::entity_name(&other);
            let descriptor = if unique {
                RelationDescriptor::morph_one(
                    inflect::singular_accessor(&entity),
                    entity.clone(),
                    pair.base,
                    pair.id_column,
                )
            } else {
                RelationDescriptor::morph_many(
                    inflect::plural_accessor(&entity),
                    entity.clone(),
                    pair.base,
                    pair.id_column,
                )
            };
            found.push(descriptor);
        }
    }
    Ok(found)
}

struct MorphPair {
    base: String,
    type_column: String,
    id_column: String,
}

/// Detect `{base}_type`/`{base}_id` pairings within one column set.
fn morph_pairs(columns: &[ColumnMetadata]) -> Vec<MorphPair> {
    let names: HashSet<&str> = columns.iter().map(|column| column.name.as_str()).collect();
    let mut pairs = Vec::new();
    for column in columns {
        let Some(base) = column.name.strip_suffix("_id") else {
            continue;
        };
        if base.is_empty() {
            continue;
        }
        let type_column = format!("{base}_type");
        if names.contains(type_column.as_str()) {
            pairs.push(MorphPair {
                base: base.to_string(),
                type_column,
                id_column: column.name.clone(),
            });
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use gantry_catalog::{MemoryCatalog, TableFixture};

    use super::*;
    use crate::relation::RelationKind;

    fn blog_catalog() -> MemoryCatalog {
        MemoryCatalog::new()
            .with_table(
                "users",
                TableFixture::new()
                    .plain_column("id", "int8")
                    .plain_column("email", "varchar"),
            )
            .with_table(
                "profiles",
                TableFixture::new()
                    .plain_column("id", "int8")
                    .plain_column("user_id", "int8")
                    .foreign_key("user_id", "users", "id")
                    .unique_index("profiles_user_id_ux", &["user_id"]),
            )
            .with_table(
                "posts",
                TableFixture::new()
                    .plain_column("id", "int8")
                    .plain_column("user_id", "int8")
                    .plain_column("title", "varchar")
                    .foreign_key("user_id", "users", "id"),
            )
            .with_table(
                "tags",
                TableFixture::new()
                    .plain_column("id", "int8")
                    .plain_column("label", "varchar"),
            )
            .with_table(
                "post_tag",
                TableFixture::new()
                    .plain_column("post_id", "int8")
                    .plain_column("tag_id", "int8")
                    .foreign_key("post_id", "posts", "id")
                    .foreign_key("tag_id", "tags", "id"),
            )
            .with_table(
                "comments",
                TableFixture::new()
                    .plain_column("id", "int8")
                    .plain_column("commentable_type", "varchar")
                    .plain_column("commentable_id", "int8")
                    .plain_column("body", "text"),
            )
    }

    fn find<'a>(
        descriptors: &'a [RelationDescriptor],
        accessor: &str,
    ) -> &'a RelationDescriptor {
        descriptors
            .iter()
            .find(|descriptor| descriptor.accessor == accessor)
            .unwrap_or_else(|| panic!("no descriptor named {accessor}"))
    }

    #[tokio::test]
    async fn unique_incoming_key_yields_has_one() {
        let catalog = blog_catalog();
        let descriptors = infer(&catalog, "users").await;
        let profile = find(&descriptors, "profile");
        assert_eq!(profile.kind, RelationKind::HasOne);
        assert_eq!(profile.related_entity, "Profile");
        assert_eq!(profile.foreign_key, "user_id");
        assert_eq!(profile.local_key, "id");
    }

    #[tokio::test]
    async fn plain_incoming_key_yields_has_many() {
        let catalog = blog_catalog();
        let descriptors = infer(&catalog, "users").await;
        let posts = find(&descriptors, "posts");
        assert_eq!(posts.kind, RelationKind::HasMany);
        assert_eq!(posts.related_entity, "Post");
        assert_eq!(posts.foreign_key, "user_id");
    }

    #[tokio::test]
    async fn the_same_key_flips_kind_with_the_index() {
        let without_index = MemoryCatalog::new()
            .with_table("users", TableFixture::new().plain_column("id", "int8"))
            .with_table(
                "profiles",
                TableFixture::new()
                    .plain_column("id", "int8")
                    .plain_column("user_id", "int8")
                    .foreign_key("user_id", "users", "id"),
            );
        let descriptors = infer(&without_index, "users").await;
        assert_eq!(find(&descriptors, "profiles").kind, RelationKind::HasMany);
    }

    #[tokio::test]
    async fn outgoing_key_yields_belongs_to() {
        let catalog = blog_catalog();
        let descriptors = infer(&catalog, "posts").await;
        let user = find(&descriptors, "user");
        assert_eq!(user.kind, RelationKind::BelongsTo);
        assert_eq!(user.related_entity, "User");
        assert_eq!(user.foreign_key, "user_id");
        assert_eq!(user.local_key, "id");
    }

    #[tokio::test]
    async fn pivot_yields_belongs_to_many() {
        let catalog = blog_catalog();
        let descriptors = infer(&catalog, "posts").await;
        let tags = find(&descriptors, "tags");
        assert_eq!(tags.kind, RelationKind::BelongsToMany);
        assert_eq!(tags.related_entity, "Tag");
        assert_eq!(tags.pivot_table.as_deref(), Some("post_tag"));
        assert_eq!(tags.foreign_key, "post_id");
        assert_eq!(tags.local_key, "tag_id");
    }

    #[tokio::test]
    async fn pivot_detection_is_symmetric() {
        let catalog = blog_catalog();
        let from_tags = infer(&catalog, "tags").await;
        let posts = find(&from_tags, "posts");
        assert_eq!(posts.kind, RelationKind::BelongsToMany);
        assert_eq!(posts.pivot_table.as_deref(), Some("post_tag"));
        assert_eq!(posts.foreign_key, "tag_id");
        assert_eq!(posts.local_key, "post_id");
    }

    #[tokio::test]
    async fn pivot_name_order_does_not_matter() {
        // "tag_post" reverses the alphabetical convention and must still
        // be detected.
        let catalog = MemoryCatalog::new()
            .with_table("posts", TableFixture::new().plain_column("id", "int8"))
            .with_table("tags", TableFixture::new().plain_column("id", "int8"))
            .with_table(
                "tag_post",
                TableFixture::new()
                    .foreign_key("tag_id", "tags", "id")
                    .foreign_key("post_id", "posts", "id"),
            );
        let descriptors = infer(&catalog, "posts").await;
        let tags = find(&descriptors, "tags");
        assert_eq!(tags.pivot_table.as_deref(), Some("tag_post"));
    }

    #[tokio::test]
    async fn local_morph_pair_yields_morph_to() {
        let catalog = blog_catalog();
        let descriptors = infer(&catalog, "comments").await;
        let commentable = find(&descriptors, "commentable");
        assert_eq!(commentable.kind, RelationKind::MorphTo);
        assert_eq!(commentable.morph_name.as_deref(), Some("commentable"));
        assert_eq!(commentable.local_key, "commentable_type");
        assert_eq!(commentable.foreign_key, "commentable_id");
        assert_eq!(
            descriptors
                .iter()
                .filter(|d| d.kind == RelationKind::MorphTo)
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn incoming_morph_pair_yields_morph_many() {
        let catalog = blog_catalog();
        let descriptors = infer(&catalog, "posts").await;
        let comments = find(&descriptors, "comments");
        assert_eq!(comments.kind, RelationKind::MorphMany);
        assert_eq!(comments.morph_name.as_deref(), Some("commentable"));
        assert_eq!(comments.foreign_key, "commentable_id");
    }

    #[tokio::test]
    async fn unique_incoming_morph_pair_yields_morph_one() {
        let catalog = MemoryCatalog::new()
            .with_table("posts", TableFixture::new().plain_column("id", "int8"))
            .with_table(
                "images",
                TableFixture::new()
                    .plain_column("id", "int8")
                    .plain_column("imageable_type", "varchar")
                    .plain_column("imageable_id", "int8")
                    .unique_index("images_morph_ux", &["imageable_type", "imageable_id"]),
            );
        let descriptors = infer(&catalog, "posts").await;
        let image = find(&descriptors, "image");
        assert_eq!(image.kind, RelationKind::MorphOne);
    }

    #[tokio::test]
    async fn first_heuristic_keeps_a_contested_accessor() {
        // The outgoing key claims "author"; the later morph pass proposes
        // the same accessor and must be dropped.
        let catalog = MemoryCatalog::new()
            .with_table("users", TableFixture::new().plain_column("id", "int8"))
            .with_table(
                "reviews",
                TableFixture::new()
                    .plain_column("id", "int8")
                    .plain_column("author_id", "int8")
                    .plain_column("author_type", "varchar")
                    .foreign_key("author_id", "users", "id"),
            );
        let descriptors = infer(&catalog, "reviews").await;
        let author = find(&descriptors, "author");
        assert_eq!(author.kind, RelationKind::BelongsTo);
        assert_eq!(
            descriptors.iter().filter(|d| d.accessor == "author").count(),
            1
        );
    }

    #[tokio::test]
    async fn table_without_keys_infers_nothing() {
        let catalog = MemoryCatalog::new()
            .with_table("logs", TableFixture::new().plain_column("id", "int8"));
        assert!(infer(&catalog, "logs").await.is_empty());
    }
}

