//! Course factory for creating test course entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

use crate::factory::helpers::next_id;

pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    duration_years: i32,
    abbr: String,
    variations: Vec<String>,
}

impl<'a> CourseFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Course {}", id),
            duration_years: 4,
            abbr: format!("C{}", id),
            variations: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn duration_years(mut self, duration_years: i32) -> Self {
        self.duration_years = duration_years;
        self
    }

    pub fn abbr(mut self, abbr: impl Into<String>) -> Self {
        self.abbr = abbr.into();
        self
    }

    pub fn variations(mut self, variations: Vec<String>) -> Self {
        self.variations = variations;
        self
    }

    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        let now = Utc::now();
        entity::course::ActiveModel {
            name: ActiveValue::Set(self.name),
            duration_years: ActiveValue::Set(self.duration_years),
            abbr: ActiveValue::Set(self.abbr),
            variations: ActiveValue::Set(json!(self.variations)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values.
pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db).build().await
}
