//! Item factory for creating test item entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

use crate::factory::helpers::next_id;

pub struct ItemFactory<'a> {
    db: &'a DatabaseConnection,
    tag_name: String,
    item_type: String,
    description: String,
    media_ids: Vec<i32>,
    tags: Vec<i32>,
    feedbacks: Vec<i32>,
}

impl<'a> ItemFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            tag_name: format!("item-{}", id),
            item_type: "project".to_string(),
            description: format!("Description for item number {}", id),
            media_ids: Vec::new(),
            tags: Vec::new(),
            feedbacks: Vec::new(),
        }
    }

    pub fn tag_name(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = tag_name.into();
        self
    }

    pub fn item_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = item_type.into();
        self
    }

    pub fn media_ids(mut self, media_ids: Vec<i32>) -> Self {
        self.media_ids = media_ids;
        self
    }

    pub fn tags(mut self, tags: Vec<i32>) -> Self {
        self.tags = tags;
        self
    }

    pub fn feedbacks(mut self, feedbacks: Vec<i32>) -> Self {
        self.feedbacks = feedbacks;
        self
    }

    pub async fn build(self) -> Result<entity::item::Model, DbErr> {
        let now = Utc::now();
        entity::item::ActiveModel {
            tag_name: ActiveValue::Set(self.tag_name),
            item_type: ActiveValue::Set(self.item_type),
            description: ActiveValue::Set(self.description),
            media_ids: ActiveValue::Set(json!(self.media_ids)),
            repo: ActiveValue::Set(None),
            deploy: ActiveValue::Set(None),
            likes: ActiveValue::Set(0),
            dislikes: ActiveValue::Set(0),
            feedbacks: ActiveValue::Set(json!(self.feedbacks)),
            tags: ActiveValue::Set(json!(self.tags)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an item with default values.
pub async fn create_item(db: &DatabaseConnection) -> Result<entity::item::Model, DbErr> {
    ItemFactory::new(db).build().await
}
