use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::from_json;
use crate::model::person::PersonDto;
use crate::model::storage::StorageDto;

/// Public post representation with author and media references resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    /// The referenced author, resolved (credential hash never present).
    pub author_id: Option<PersonDto>,
    pub tags: Vec<String>,
    /// The referenced media storage records, resolved.
    pub media_ids: Vec<StorageDto>,
    pub likes: i64,
    pub dislikes: i64,
    /// Opaque comment ids attached to the post.
    pub comments: Vec<i64>,
    pub deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostDto {
    pub fn from_entity(
        e: entity::post::Model,
        author: Option<PersonDto>,
        media: Vec<StorageDto>,
    ) -> Self {
        Self {
            id: e.id,
            title: e.title,
            content: e.content,
            author_id: author,
            tags: from_json(e.tags),
            media_ids: media,
            likes: e.likes,
            dislikes: e.dislikes,
            comments: from_json(e.comments),
            deleted: e.deleted,
            deleted_at: e.deleted_at,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

/// Compact post representation used when a post appears as a feedback
/// reference inside another entity (no nested author resolution).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummaryDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostSummaryDto {
    pub fn from_entity(e: entity::post::Model) -> Self {
        Self {
            id: e.id,
            title: e.title,
            content: e.content,
            tags: from_json(e.tags),
            likes: e.likes,
            dislikes: e.dislikes,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostDto {
    pub title: String,
    pub content: String,
    pub author_id: i32,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub media_ids: Option<Vec<i32>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostDto {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub media_ids: Option<Vec<i32>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentDto {
    pub comment_id: i64,
}

/// Filter parameters for the post listing.
#[derive(Debug, Default, Clone)]
pub struct PostListParams {
    pub author_id: Option<i32>,
    pub tag: Option<String>,
    pub search: Option<String>,
    pub include_deleted: bool,
}
