use super::*;

/// Soft delete hides the record from default lookups but keeps it reachable
/// with the include-deleted flag; clearing the flag restores it.
#[tokio::test]
async fn delete_hide_restore_cycle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Storage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let record = create_storage(db).await?;

    let repo = StorageRepository::new(db);
    let deleted = repo.soft_delete(record.id).await?.unwrap();
    assert!(deleted.deleted);
    assert!(deleted.deleted_at.is_some());
    assert!(repo.find_by_id(record.id, false).await?.is_none());

    let found = repo.find_by_id(record.id, true).await?.unwrap();
    let restored = repo.clear_deleted(found).await?;
    assert!(!restored.deleted);
    assert!(restored.deleted_at.is_none());
    assert!(repo.find_by_id(record.id, false).await?.is_some());

    Ok(())
}

/// Hard delete returns the removed row and leaves nothing behind.
#[tokio::test]
async fn hard_delete_removes_the_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Storage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let record = create_storage(db).await?;

    let repo = StorageRepository::new(db);
    let removed = repo.hard_delete(record.id).await?.unwrap();
    assert_eq!(removed.id, record.id);

    assert!(repo.find_by_id(record.id, true).await?.is_none());
    assert!(repo.hard_delete(record.id).await?.is_none());

    Ok(())
}
