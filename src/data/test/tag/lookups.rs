use super::*;

/// Popular tags are the most recently created ones, bounded by the limit.
#[tokio::test]
async fn popular_returns_newest_first_up_to_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        TagFactory::new(db).build().await?;
    }

    let repo = TagRepository::new(db);
    let popular = repo.get_popular(3).await?;

    assert_eq!(popular.len(), 3);

    Ok(())
}

/// Color lookup matches the exact stored value.
#[tokio::test]
async fn finds_by_color_and_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    TagFactory::new(db).tag_name("rust").color("#ff0000").build().await?;
    TagFactory::new(db).tag_name("sql").color("#00ff00").build().await?;

    let repo = TagRepository::new(db);

    let red = repo.get_by_color("#ff0000").await?;
    assert_eq!(red.len(), 1);
    assert_eq!(red[0].tag_name, "rust");

    assert!(repo.find_by_name("sql").await?.is_some());
    assert!(repo.find_by_name("missing").await?.is_none());

    Ok(())
}

/// The unique constraint on tag name rejects duplicates.
#[tokio::test]
async fn duplicate_tag_name_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    TagFactory::new(db).tag_name("rust").build().await?;
    let result = TagFactory::new(db).tag_name("rust").build().await;

    assert!(result.is_err());

    Ok(())
}
