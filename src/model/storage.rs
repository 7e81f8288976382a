use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public representation of a stored file record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageDto {
    pub id: i32,
    pub url: String,
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    pub uploaded_at: DateTime<Utc>,
    pub deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StorageDto {
    pub fn from_entity(e: entity::storage::Model) -> Self {
        Self {
            id: e.id,
            url: e.url,
            filename: e.filename,
            original_name: e.original_name,
            mimetype: e.mimetype,
            size: e.size,
            uploaded_at: e.uploaded_at,
            deleted: e.deleted,
            deleted_at: e.deleted_at,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

/// Input for creating a storage record from already-hosted file metadata.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStorageDto {
    pub url: String,
    pub filename: String,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub mimetype: Option<String>,
    #[serde(default)]
    pub size: Option<i64>,
}

/// Partial update of a storage record.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStorageDto {
    pub url: Option<String>,
    pub filename: Option<String>,
    pub original_name: Option<String>,
    pub mimetype: Option<String>,
    pub size: Option<i64>,
}

/// Filter parameters for the storage listing.
#[derive(Debug, Default, Clone)]
pub struct StorageListParams {
    pub search: Option<String>,
    pub file_type: Option<String>,
    pub include_deleted: bool,
}

/// An uploaded file as received from the multipart form.
#[derive(Debug)]
pub struct UploadedFile {
    pub original_name: Option<String>,
    pub mimetype: Option<String>,
    pub bytes: Vec<u8>,
}
