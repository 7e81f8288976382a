//! Storage service: file metadata CRUD, the soft-delete state machine, and
//! the physical upload/download/removal flows.
//!
//! Uploaded bytes land in the configured storage directory under a
//! timestamp-prefixed sanitized filename. If the metadata insert fails the
//! on-disk file is removed again, so no orphaned files accumulate.

use std::path::{Path, PathBuf};

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::data::page::{PageParams, Paginated};
use crate::data::storage::StorageRepository;
use crate::error::AppError;
use crate::model::storage::{
    CreateStorageDto, StorageDto, StorageListParams, UpdateStorageDto, UploadedFile,
};

pub struct StorageService<'a> {
    db: &'a DatabaseConnection,
}

/// A stored file resolved to its on-disk location, ready to be served.
pub struct FileHandle {
    pub path: PathBuf,
    pub download_name: String,
    pub mimetype: Option<String>,
}

impl<'a> StorageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a metadata record for an already-hosted file.
    pub async fn create(&self, dto: CreateStorageDto) -> Result<StorageDto, AppError> {
        let record = StorageRepository::new(self.db).insert(&dto).await?;
        Ok(StorageDto::from_entity(record))
    }

    pub async fn get_all(
        &self,
        params: &StorageListParams,
        page: PageParams,
    ) -> Result<Paginated<StorageDto>, AppError> {
        let (records, total) = StorageRepository::new(self.db).get_all(params, page).await?;
        Ok(Paginated::new(
            records.into_iter().map(StorageDto::from_entity).collect(),
            total,
            page,
        ))
    }

    pub async fn get_by_id(&self, id: i32, include_deleted: bool) -> Result<StorageDto, AppError> {
        StorageRepository::new(self.db)
            .find_by_id(id, include_deleted)
            .await?
            .map(StorageDto::from_entity)
            .ok_or_else(|| AppError::NotFound("Storage not found".to_string()))
    }

    pub async fn update(&self, id: i32, dto: UpdateStorageDto) -> Result<StorageDto, AppError> {
        StorageRepository::new(self.db)
            .update(id, &dto)
            .await?
            .map(StorageDto::from_entity)
            .ok_or_else(|| AppError::NotFound("Storage not found".to_string()))
    }

    /// Soft-deletes a record. A second delete still succeeds and leaves the
    /// original deletion timestamp in place; the on-disk file stays.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        StorageRepository::new(self.db)
            .soft_delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Storage not found".to_string()))?;
        Ok(())
    }

    /// Restores a soft-deleted record. Restoring an active record is an
    /// invalid-state error.
    pub async fn restore(&self, id: i32) -> Result<StorageDto, AppError> {
        let repo = StorageRepository::new(self.db);
        let record = repo
            .find_by_id(id, true)
            .await?
            .ok_or_else(|| AppError::NotFound("Storage not found".to_string()))?;

        if !record.deleted {
            return Err(AppError::InvalidState("Storage is not deleted".to_string()));
        }

        Ok(StorageDto::from_entity(repo.clear_deleted(record).await?))
    }

    /// Persists an uploaded file: bytes to disk first, then the metadata row.
    /// When the insert fails the file is removed again before the error
    /// propagates.
    pub async fn store_upload(
        &self,
        file: UploadedFile,
        public_url: &str,
        storage_dir: &Path,
    ) -> Result<StorageDto, AppError> {
        let filename = unique_filename(file.original_name.as_deref());
        let path = storage_dir.join(&filename);

        tokio::fs::create_dir_all(storage_dir).await?;
        tokio::fs::write(&path, &file.bytes).await?;

        let dto = CreateStorageDto {
            url: format!("{}storage/{}", public_url, filename),
            filename,
            original_name: file.original_name,
            mimetype: file.mimetype,
            size: Some(file.bytes.len() as i64),
        };

        match StorageRepository::new(self.db).insert(&dto).await {
            Ok(record) => Ok(StorageDto::from_entity(record)),
            Err(err) => {
                if let Err(unlink_err) = tokio::fs::remove_file(&path).await {
                    tracing::warn!(
                        "Failed to remove {} after metadata insert error: {}",
                        path.display(),
                        unlink_err
                    );
                }
                Err(err.into())
            }
        }
    }

    /// Resolves a record to its on-disk file for download/view, verifying the
    /// file still exists.
    pub async fn file_handle(&self, id: i32, storage_dir: &Path) -> Result<FileHandle, AppError> {
        let record = StorageRepository::new(self.db)
            .find_by_id(id, false)
            .await?
            .ok_or_else(|| AppError::NotFound("Storage not found".to_string()))?;

        let path = storage_dir.join(&record.filename);
        if !path.is_file() {
            return Err(AppError::NotFound("File not found on server".to_string()));
        }

        Ok(FileHandle {
            path,
            download_name: record
                .original_name
                .unwrap_or_else(|| record.filename.clone()),
            mimetype: record.mimetype,
        })
    }

    /// Hard-deletes a record (the uploads surface) and best-effort removes
    /// the on-disk file. A missing physical file is not an error: the row is
    /// already gone.
    pub async fn hard_delete(&self, id: i32, storage_dir: &Path) -> Result<StorageDto, AppError> {
        let record = StorageRepository::new(self.db)
            .hard_delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Storage not found".to_string()))?;

        let path = storage_dir.join(&record.filename);
        if path.is_file() {
            if let Err(err) = tokio::fs::remove_file(&path).await {
                tracing::warn!("Failed to remove file {}: {}", path.display(), err);
            }
        }

        Ok(StorageDto::from_entity(record))
    }
}

/// Builds a collision-resistant on-disk filename from the upload's original
/// name: millisecond timestamp prefix plus the sanitized original.
fn unique_filename(original_name: Option<&str>) -> String {
    let base = original_name.unwrap_or("file");
    let sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let sanitized = if sanitized.is_empty() {
        "file".to_string()
    } else {
        sanitized
    };
    format!("{}-{}", Utc::now().timestamp_millis(), sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_hostile_original_names() {
        let name = unique_filename(Some("../etc/passwd"));
        let (_, suffix) = name.split_once('-').unwrap();
        assert_eq!(suffix, ".._etc_passwd");
    }

    #[test]
    fn falls_back_to_a_generic_name() {
        let name = unique_filename(None);
        assert!(name.ends_with("-file"));
    }
}
