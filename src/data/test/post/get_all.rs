use super::*;

/// Default listings exclude soft-deleted posts from both the slice and the
/// total; the include-deleted flag brings them back.
#[tokio::test]
async fn excludes_deleted_unless_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_person(db).await?;
    create_post(db, author.id).await?;
    PostFactory::new(db, author.id).deleted(true).build().await?;

    let repo = PostRepository::new(db);

    let (visible, total) = repo
        .get_all(&PostListParams::default(), PageParams::default())
        .await?;
    assert_eq!(visible.len(), 1);
    assert_eq!(total, 1);

    let params = PostListParams {
        include_deleted: true,
        ..Default::default()
    };
    let (all, total) = repo.get_all(&params, PageParams::default()).await?;
    assert_eq!(all.len(), 2);
    assert_eq!(total, 2);

    Ok(())
}

/// The tag filter matches membership in the JSON tag array.
#[tokio::test]
async fn filters_by_tag_and_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .with_table(entity::prelude::Post)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = create_person(db).await?;
    let bob = create_person(db).await?;
    PostFactory::new(db, alice.id)
        .tags(vec!["rust".to_string()])
        .build()
        .await?;
    PostFactory::new(db, bob.id)
        .tags(vec!["sql".to_string()])
        .build()
        .await?;

    let repo = PostRepository::new(db);

    let params = PostListParams {
        tag: Some("rust".to_string()),
        ..Default::default()
    };
    let (tagged, total) = repo.get_all(&params, PageParams::default()).await?;
    assert_eq!(total, 1);
    assert_eq!(tagged[0].author_id, alice.id);

    let params = PostListParams {
        author_id: Some(bob.id),
        ..Default::default()
    };
    let (by_bob, total) = repo.get_all(&params, PageParams::default()).await?;
    assert_eq!(total, 1);
    assert_eq!(by_bob[0].author_id, bob.id);

    Ok(())
}
