use test_utils::builder::TestBuilder;
use test_utils::factory::helpers::next_id;
use test_utils::factory::storage::create_storage;

use crate::error::AppError;
use crate::model::storage::UploadedFile;
use crate::service::storage::StorageService;

fn temp_storage_dir() -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "eduhub-storage-test-{}-{}",
        std::process::id(),
        next_id()
    ))
}

/// Uploading writes the bytes to disk and records url, size and original
/// name in the metadata row.
#[tokio::test]
async fn store_upload_persists_file_and_metadata() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = temp_storage_dir();

    let record = StorageService::new(db)
        .store_upload(
            UploadedFile {
                original_name: Some("notes.pdf".to_string()),
                mimetype: Some("application/pdf".to_string()),
                bytes: b"pdf bytes".to_vec(),
            },
            "http://localhost:3000/",
            &dir,
        )
        .await
        .unwrap();

    assert!(record.filename.ends_with("notes.pdf"));
    assert_eq!(record.original_name.as_deref(), Some("notes.pdf"));
    assert_eq!(record.size, Some(9));
    assert!(record
        .url
        .starts_with("http://localhost:3000/storage/"));

    let on_disk = tokio::fs::read(dir.join(&record.filename)).await.unwrap();
    assert_eq!(on_disk, b"pdf bytes");

    tokio::fs::remove_dir_all(&dir).await.ok();
}

/// Hard delete removes both the row and the physical file.
#[tokio::test]
async fn hard_delete_removes_row_and_file() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = temp_storage_dir();

    let service = StorageService::new(db);
    let record = service
        .store_upload(
            UploadedFile {
                original_name: Some("photo.png".to_string()),
                mimetype: Some("image/png".to_string()),
                bytes: vec![1, 2, 3],
            },
            "http://localhost:3000/",
            &dir,
        )
        .await
        .unwrap();

    let path = dir.join(&record.filename);
    assert!(path.is_file());

    service.hard_delete(record.id, &dir).await.unwrap();

    assert!(!path.exists());
    let err = service.get_by_id(record.id, true).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    tokio::fs::remove_dir_all(&dir).await.ok();
}

/// Restoring an active storage record is rejected as invalid state.
#[tokio::test]
async fn restore_requires_a_deleted_record() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let record = create_storage(db).await.unwrap();

    let service = StorageService::new(db);
    let err = service.restore(record.id).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));

    service.delete(record.id).await.unwrap();
    let restored = service.restore(record.id).await.unwrap();
    assert!(!restored.deleted);
}
