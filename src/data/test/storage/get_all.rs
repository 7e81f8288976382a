use super::*;

/// The fileType filter matches on the filename extension.
#[tokio::test]
async fn filters_by_file_extension() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Storage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    StorageFactory::new(db).filename("notes.pdf").build().await?;
    StorageFactory::new(db).filename("photo.png").build().await?;

    let repo = StorageRepository::new(db);
    let params = StorageListParams {
        file_type: Some("pdf".to_string()),
        ..Default::default()
    };
    let (found, total) = repo.get_all(&params, PageParams::default()).await?;

    assert_eq!(total, 1);
    assert_eq!(found[0].filename, "notes.pdf");

    Ok(())
}

/// Deleted records are excluded from the listing unless requested.
#[tokio::test]
async fn excludes_deleted_unless_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Storage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_storage(db).await?;
    StorageFactory::new(db).deleted(true).build().await?;

    let repo = StorageRepository::new(db);

    let (_, total) = repo
        .get_all(&StorageListParams::default(), PageParams::default())
        .await?;
    assert_eq!(total, 1);

    let params = StorageListParams {
        include_deleted: true,
        ..Default::default()
    };
    let (_, total) = repo.get_all(&params, PageParams::default()).await?;
    assert_eq!(total, 2);

    Ok(())
}
