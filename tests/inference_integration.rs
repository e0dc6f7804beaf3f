//! End-to-end inference scenarios over fixture catalogs.

use gantry::prelude::*;

fn find<'a>(descriptors: &'a [RelationDescriptor], accessor: &str) -> &'a RelationDescriptor {
    descriptors
        .iter()
        .find(|descriptor| descriptor.accessor == accessor)
        .unwrap_or_else(|| panic!("no descriptor named {accessor}"))
}

#[tokio::test]
async fn users_with_uniquely_keyed_profiles_get_has_one() {
    let catalog = MemoryCatalog::new()
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
                .plain_column("bio", "text")
                .foreign_key("user_id", "users", "id")
                .unique_index("profiles_user_id_ux", &["user_id"]),
        );

    let descriptors = infer(&catalog, "users").await;
    let profile = find(&descriptors, "profile");
    assert_eq!(profile.kind, RelationKind::HasOne);
    assert_eq!(profile.related_entity, "Profile");
    assert_eq!(profile.foreign_key, "user_id");
}

#[tokio::test]
async fn posts_and_tags_join_through_their_pivot() {
    let catalog = MemoryCatalog::new()
        .with_table(
            "posts",
            TableFixture::new()
                .plain_column("id", "int8")
                .plain_column("title", "varchar"),
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
        );

    let from_posts = infer(&catalog, "posts").await;
    let tags = find(&from_posts, "tags");
    assert_eq!(tags.kind, RelationKind::BelongsToMany);
    assert_eq!(tags.pivot_table.as_deref(), Some("post_tag"));

    // The reciprocal direction must resolve through the same pivot.
    let from_tags = infer(&catalog, "tags").await;
    let posts = find(&from_tags, "posts");
    assert_eq!(posts.kind, RelationKind::BelongsToMany);
    assert_eq!(posts.pivot_table.as_deref(), Some("post_tag"));
}

#[tokio::test]
async fn a_commentable_table_round_trips_both_morph_sides() {
    let catalog = MemoryCatalog::new()
        .with_table(
            "posts",
            TableFixture::new().plain_column("id", "int8"),
        )
        .with_table(
            "comments",
            TableFixture::new()
                .plain_column("id", "int8")
                .plain_column("commentable_type", "varchar")
                .plain_column("commentable_id", "int8")
                .plain_column("body", "text"),
        );

    let from_comments = infer(&catalog, "comments").await;
    let commentable = find(&from_comments, "commentable");
    assert_eq!(commentable.kind, RelationKind::MorphTo);
    assert_eq!(commentable.morph_name.as_deref(), Some("commentable"));

    let from_posts = infer(&catalog, "posts").await;
    let comments = find(&from_posts, "comments");
    assert_eq!(comments.kind, RelationKind::MorphMany);
    assert_eq!(comments.morph_name.as_deref(), Some("commentable"));
}

#[tokio::test]
async fn an_isolated_table_yields_no_descriptors() {
    let catalog = MemoryCatalog::new().with_table(
        "settings",
        TableFixture::new()
            .plain_column("id", "int8")
            .plain_column("key", "varchar")
            .plain_column("value", "text"),
    );
    assert!(infer(&catalog, "settings").await.is_empty());
}
