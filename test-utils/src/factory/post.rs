//! Post factory for creating test post entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

use crate::factory::helpers::{empty_list, next_id};

pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    content: String,
    author_id: i32,
    tags: Vec<String>,
    media_ids: Vec<i32>,
    likes: i64,
    deleted: bool,
    created_at: Option<DateTime<Utc>>,
}

impl<'a> PostFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Post title {}", id),
            content: format!("Post content number {} with enough length.", id),
            author_id,
            tags: Vec::new(),
            media_ids: Vec::new(),
            likes: 0,
            deleted: false,
            created_at: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn media_ids(mut self, media_ids: Vec<i32>) -> Self {
        self.media_ids = media_ids;
        self
    }

    pub fn likes(mut self, likes: i64) -> Self {
        self.likes = likes;
        self
    }

    /// Inserts the post already soft-deleted (with a deletion timestamp).
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Pins the creation timestamp, for ordering-sensitive tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        let now = Utc::now();
        let created_at = self.created_at.unwrap_or(now);
        entity::post::ActiveModel {
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            author_id: ActiveValue::Set(self.author_id),
            tags: ActiveValue::Set(json!(self.tags)),
            media_ids: ActiveValue::Set(json!(self.media_ids)),
            likes: ActiveValue::Set(self.likes),
            dislikes: ActiveValue::Set(0),
            comments: ActiveValue::Set(empty_list()),
            deleted: ActiveValue::Set(self.deleted),
            deleted_at: ActiveValue::Set(self.deleted.then_some(now)),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post for the given author with default values.
pub async fn create_post(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, author_id).build().await
}
