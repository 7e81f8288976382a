//! Assignature factory for creating test assignature entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

use crate::factory::helpers::{empty_list, next_id};

pub struct AssignatureFactory<'a> {
    db: &'a DatabaseConnection,
    tag_name: String,
    assignature_type: String,
    description: String,
    media_ids: Vec<i32>,
    institution_ids: Vec<i32>,
    tags: Vec<i32>,
}

impl<'a> AssignatureFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            tag_name: format!("assignature-{}", id),
            assignature_type: "superior".to_string(),
            description: format!("Description for assignature number {}", id),
            media_ids: Vec::new(),
            institution_ids: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn tag_name(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = tag_name.into();
        self
    }

    pub fn assignature_type(mut self, assignature_type: impl Into<String>) -> Self {
        self.assignature_type = assignature_type.into();
        self
    }

    pub fn media_ids(mut self, media_ids: Vec<i32>) -> Self {
        self.media_ids = media_ids;
        self
    }

    pub fn institution_ids(mut self, institution_ids: Vec<i32>) -> Self {
        self.institution_ids = institution_ids;
        self
    }

    pub fn tags(mut self, tags: Vec<i32>) -> Self {
        self.tags = tags;
        self
    }

    pub async fn build(self) -> Result<entity::assignature::Model, DbErr> {
        let now = Utc::now();
        entity::assignature::ActiveModel {
            tag_name: ActiveValue::Set(self.tag_name),
            assignature_type: ActiveValue::Set(self.assignature_type),
            description: ActiveValue::Set(self.description),
            media_ids: ActiveValue::Set(json!(self.media_ids)),
            module_ids: ActiveValue::Set(empty_list()),
            task_ids: ActiveValue::Set(empty_list()),
            classroom_ids: ActiveValue::Set(empty_list()),
            institution_ids: ActiveValue::Set(json!(self.institution_ids)),
            likes: ActiveValue::Set(0),
            dislikes: ActiveValue::Set(0),
            feedbacks: ActiveValue::Set(empty_list()),
            tags: ActiveValue::Set(json!(self.tags)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an assignature with default values.
pub async fn create_assignature(
    db: &DatabaseConnection,
) -> Result<entity::assignature::Model, DbErr> {
    AssignatureFactory::new(db).build().await
}
