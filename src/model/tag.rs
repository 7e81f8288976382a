use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::storage::StorageDto;

/// Public tag representation with its media reference resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub id: i32,
    pub tag_name: String,
    pub description: String,
    pub color: String,
    /// The referenced media storage record, resolved.
    pub media_id: Option<StorageDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TagDto {
    pub fn from_entity(e: entity::tag::Model, media: Option<StorageDto>) -> Self {
        Self {
            id: e.id,
            tag_name: e.tag_name,
            description: e.description,
            color: e.color,
            media_id: media,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagDto {
    pub tag_name: String,
    pub description: String,
    pub color: String,
    #[serde(default)]
    pub media_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTagDto {
    pub tag_name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub media_id: Option<i32>,
}

/// Filter parameters for the tag listing.
#[derive(Debug, Default, Clone)]
pub struct TagListParams {
    pub search: Option<String>,
    pub color: Option<String>,
}
