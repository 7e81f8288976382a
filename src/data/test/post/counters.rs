use super::*;

/// N like calls increment the counter by exactly N.
#[tokio::test]
async fn likes_accumulate_one_per_call() -> Result<(), DbErr> {
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
    for expected in 1..=3 {
        let likes = repo.increment_likes(post.id).await?.unwrap();
        assert_eq!(likes, expected);
    }

    let dislikes = repo.increment_dislikes(post.id).await?.unwrap();
    assert_eq!(dislikes, 1);

    Ok(())
}

/// Counter updates report absence for unknown or soft-deleted posts.
#[tokio::test]
async fn missing_or_deleted_posts_yield_none() -> Result<(), DbErr> {
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
    assert!(repo.increment_likes(999).await?.is_none());

    repo.soft_delete(post.id).await?;
    assert!(repo.increment_likes(post.id).await?.is_none());

    Ok(())
}
