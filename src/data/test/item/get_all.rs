use super::*;

/// The type filter narrows to the exact content type.
#[tokio::test]
async fn filters_by_type_and_search() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Item)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ItemFactory::new(db)
        .tag_name("rust-workshop")
        .item_type("video")
        .build()
        .await?;
    ItemFactory::new(db)
        .tag_name("sql-notes")
        .item_type("notebook")
        .build()
        .await?;

    let repo = ItemRepository::new(db);

    let params = ItemListParams {
        item_type: Some("video".to_string()),
        ..Default::default()
    };
    let (videos, total) = repo.get_all(&params, PageParams::default()).await?;
    assert_eq!(total, 1);
    assert_eq!(videos[0].tag_name, "rust-workshop");

    let params = ItemListParams {
        search: Some("sql".to_string()),
        ..Default::default()
    };
    let (found, total) = repo.get_all(&params, PageParams::default()).await?;
    assert_eq!(total, 1);
    assert_eq!(found[0].tag_name, "sql-notes");

    Ok(())
}
