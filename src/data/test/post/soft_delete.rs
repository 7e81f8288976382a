use super::*;

/// Soft delete sets the flag and deletion timestamp and hides the post from
/// default lookups; an explicit include-deleted lookup still finds it.
#[tokio::test]
async fn marks_deleted_and_hides_from_default_lookup() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_person(db).await?;
    let post = create_post(db, author.id).await?;

    let repo = PostRepository::new(db);
    let deleted = repo.soft_delete(post.id).await?.unwrap();

    assert!(deleted.deleted);
    assert!(deleted.deleted_at.is_some());

    assert!(repo.find_by_id(post.id, false).await?.is_none());
    assert!(repo.find_by_id(post.id, true).await?.is_some());

    Ok(())
}

/// A second delete is idempotent: it succeeds without touching the original
/// deletion timestamp.
#[tokio::test]
async fn second_delete_keeps_the_original_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_person(db).await?;
    let post = create_post(db, author.id).await?;

    let repo = PostRepository::new(db);
    let first = repo.soft_delete(post.id).await?.unwrap();
    let second = repo.soft_delete(post.id).await?.unwrap();

    assert_eq!(first.deleted_at, second.deleted_at);

    Ok(())
}

/// Clearing the flag makes the post visible again with no deletion timestamp.
#[tokio::test]
async fn clear_deleted_restores_visibility() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_person(db).await?;
    let post = create_post(db, author.id).await?;

    let repo = PostRepository::new(db);
    repo.soft_delete(post.id).await?;

    let deleted = repo.find_by_id(post.id, true).await?.unwrap();
    let restored = repo.clear_deleted(deleted).await?;

    assert!(!restored.deleted);
    assert!(restored.deleted_at.is_none());
    assert!(repo.find_by_id(post.id, false).await?.is_some());

    Ok(())
}
