//! Tag factory for creating test tag entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

pub struct TagFactory<'a> {
    db: &'a DatabaseConnection,
    tag_name: String,
    description: String,
    color: String,
    media_id: Option<i32>,
}

impl<'a> TagFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            tag_name: format!("tag-{}", id),
            description: format!("Description for tag number {}", id),
            color: "#3498db".to_string(),
            media_id: None,
        }
    }

    pub fn tag_name(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = tag_name.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn media_id(mut self, media_id: i32) -> Self {
        self.media_id = Some(media_id);
        self
    }

    pub async fn build(self) -> Result<entity::tag::Model, DbErr> {
        let now = Utc::now();
        entity::tag::ActiveModel {
            tag_name: ActiveValue::Set(self.tag_name),
            description: ActiveValue::Set(self.description),
            color: ActiveValue::Set(self.color),
            media_id: ActiveValue::Set(self.media_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tag with default values.
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db).build().await
}
