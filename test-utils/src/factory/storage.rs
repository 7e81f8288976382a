//! Storage factory for creating test file records.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

pub struct StorageFactory<'a> {
    db: &'a DatabaseConnection,
    url: String,
    filename: String,
    original_name: Option<String>,
    mimetype: Option<String>,
    deleted: bool,
}

impl<'a> StorageFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            url: format!("http://localhost:3000/storage/file{}.png", id),
            filename: format!("file{}.png", id),
            original_name: Some(format!("original{}.png", id)),
            mimetype: Some("image/png".to_string()),
            deleted: false,
        }
    }

    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn original_name(mut self, original_name: impl Into<String>) -> Self {
        self.original_name = Some(original_name.into());
        self
    }

    pub fn mimetype(mut self, mimetype: impl Into<String>) -> Self {
        self.mimetype = Some(mimetype.into());
        self
    }

    /// Inserts the record already soft-deleted (with a deletion timestamp).
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    pub async fn build(self) -> Result<entity::storage::Model, DbErr> {
        let now = Utc::now();
        entity::storage::ActiveModel {
            url: ActiveValue::Set(self.url),
            filename: ActiveValue::Set(self.filename),
            original_name: ActiveValue::Set(self.original_name),
            mimetype: ActiveValue::Set(self.mimetype),
            size: ActiveValue::Set(Some(1024)),
            uploaded_at: ActiveValue::Set(now),
            deleted: ActiveValue::Set(self.deleted),
            deleted_at: ActiveValue::Set(self.deleted.then_some(now)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a storage record with default values.
pub async fn create_storage(db: &DatabaseConnection) -> Result<entity::storage::Model, DbErr> {
    StorageFactory::new(db).build().await
}
