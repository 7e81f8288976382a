use super::*;

/// Each like/dislike call adds exactly one.
#[tokio::test]
async fn counters_increment_by_one() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = create_item(db).await?;

    let repo = ItemRepository::new(db);
    assert_eq!(repo.increment_likes(item.id).await?, Some(1));
    assert_eq!(repo.increment_likes(item.id).await?, Some(2));
    assert_eq!(repo.increment_dislikes(item.id).await?, Some(1));

    assert!(repo.increment_likes(999).await?.is_none());

    Ok(())
}
