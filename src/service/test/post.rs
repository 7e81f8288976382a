use test_utils::builder::TestBuilder;
use test_utils::factory::person::create_person;
use test_utils::factory::post::{create_post, PostFactory};
use test_utils::factory::storage::create_storage;

use crate::data::page::PageParams;
use crate::error::AppError;
use crate::model::post::PostListParams;
use crate::service::post::PostService;

/// The full soft-delete lifecycle: delete hides the post, the explicit flag
/// reveals it with its deletion timestamp, restore brings it back, and
/// restoring an active post is rejected.
#[tokio::test]
async fn soft_delete_restore_lifecycle() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_person(db).await.unwrap();
    let post = create_post(db, author.id).await.unwrap();

    let service = PostService::new(db);

    service.delete(post.id).await.unwrap();

    let err = service.get_by_id(post.id, false).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let hidden = service.get_by_id(post.id, true).await.unwrap();
    assert!(hidden.deleted);
    assert!(hidden.deleted_at.is_some());

    let listing = service
        .get_all(&PostListParams::default(), PageParams::default())
        .await
        .unwrap();
    assert!(listing.items.is_empty());

    let restored = service.restore(post.id).await.unwrap();
    assert!(!restored.deleted);
    assert!(restored.deleted_at.is_none());

    let listing = service
        .get_all(&PostListParams::default(), PageParams::default())
        .await
        .unwrap();
    assert_eq!(listing.items.len(), 1);

    // A second restore hits an active post and is rejected.
    let err = service.restore(post.id).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));
}

/// Like counts accumulate one per call through the service.
#[tokio::test]
async fn likes_accumulate_across_calls() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_person(db).await.unwrap();
    let post = create_post(db, author.id).await.unwrap();

    let service = PostService::new(db);
    for expected in 1..=4 {
        assert_eq!(service.like(post.id).await.unwrap(), expected);
    }
    assert_eq!(service.dislike(post.id).await.unwrap(), 1);
}

/// Responses resolve the author (sans hash) and media references.
#[tokio::test]
async fn resolves_author_and_media_references() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_person(db).await.unwrap();
    let media = create_storage(db).await.unwrap();
    let post = PostFactory::new(db, author.id)
        .media_ids(vec![media.id])
        .build()
        .await
        .unwrap();

    let dto = PostService::new(db).get_by_id(post.id, false).await.unwrap();

    let resolved_author = dto.author_id.as_ref().expect("author should resolve");
    assert_eq!(resolved_author.id, author.id);
    assert_eq!(dto.media_ids.len(), 1);
    assert_eq!(dto.media_ids[0].id, media.id);

    let body = serde_json::to_string(&dto).unwrap();
    assert!(!body.contains("passwordHash"));
}

/// Pagination totals satisfy totalPages == ceil(totalItems / limit).
#[tokio::test]
async fn pagination_totals_are_consistent() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_person(db).await.unwrap();
    for _ in 0..7 {
        create_post(db, author.id).await.unwrap();
    }

    let service = PostService::new(db);
    let page = service
        .get_all(
            &PostListParams::default(),
            PageParams::new(Some(1), Some(3)),
        )
        .await
        .unwrap();

    assert_eq!(page.items.len(), 3);
    assert_eq!(page.total_items, 7);
    assert_eq!(page.total_pages(), 3);
}

/// Comment references append and come back in order.
#[tokio::test]
async fn add_comment_appends_references() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_person(db).await.unwrap();
    let post = create_post(db, author.id).await.unwrap();

    let service = PostService::new(db);
    service.add_comment(post.id, 11).await.unwrap();
    let dto = service.add_comment(post.id, 12).await.unwrap();

    assert_eq!(dto.comments, vec![11, 12]);
}
