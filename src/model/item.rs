use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::from_json;
use crate::model::post::PostSummaryDto;
use crate::model::storage::StorageDto;
use crate::model::tag::TagDto;

/// The closed set of item content types.
pub const ITEM_TYPES: [&str; 10] = [
    "project",
    "notebook",
    "flashcard",
    "presentation",
    "book",
    "article",
    "research",
    "podcast",
    "video",
    "other",
];

pub const DEFAULT_ITEM_TYPE: &str = "project";

/// Public item representation with media, tag and feedback references
/// resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: i32,
    pub tag_name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub description: String,
    #[serde(rename = "mediasId")]
    pub media: Vec<StorageDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy: Option<String>,
    pub likes: i64,
    pub dislikes: i64,
    pub feedbacks: Vec<PostSummaryDto>,
    pub tags: Vec<TagDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItemDto {
    pub fn from_entity(
        e: entity::item::Model,
        media: Vec<StorageDto>,
        tags: Vec<TagDto>,
        feedbacks: Vec<PostSummaryDto>,
    ) -> Self {
        Self {
            id: e.id,
            tag_name: e.tag_name,
            item_type: e.item_type,
            description: e.description,
            media,
            repo: e.repo,
            deploy: e.deploy,
            likes: e.likes,
            dislikes: e.dislikes,
            feedbacks,
            tags,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemDto {
    pub tag_name: String,
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    pub description: String,
    #[serde(rename = "mediasId", default)]
    pub media_ids: Option<Vec<i32>>,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub deploy: Option<String>,
    #[serde(default)]
    pub feedbacks: Option<Vec<i32>>,
    #[serde(default)]
    pub tags: Option<Vec<i32>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemDto {
    pub tag_name: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "mediasId")]
    pub media_ids: Option<Vec<i32>>,
    pub repo: Option<String>,
    pub deploy: Option<String>,
    pub feedbacks: Option<Vec<i32>>,
    pub tags: Option<Vec<i32>>,
}

/// Filter parameters for the item listing.
#[derive(Debug, Default, Clone)]
pub struct ItemListParams {
    pub item_type: Option<String>,
    pub search: Option<String>,
}

/// Decoded JSON reference lists of an item row.
pub struct ItemRefs {
    pub media_ids: Vec<i32>,
    pub tag_ids: Vec<i32>,
    pub feedback_ids: Vec<i32>,
}

impl ItemRefs {
    pub fn from_entity(e: &entity::item::Model) -> Self {
        Self {
            media_ids: from_json(e.media_ids.clone()),
            tag_ids: from_json(e.tags.clone()),
            feedback_ids: from_json(e.feedbacks.clone()),
        }
    }
}
