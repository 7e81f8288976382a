//! Person factory for creating test person entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

use crate::factory::helpers::next_id;

/// Factory for creating test persons with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let person = PersonFactory::new(&db)
///     .username("alice")
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct PersonFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    roles: Vec<String>,
    password_hash: String,
    is_active: bool,
    avatar_id: Option<i32>,
    cover_id: Option<i32>,
}

impl<'a> PersonFactory<'a> {
    /// Creates a new factory with unique username/email defaults.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user_{}", id),
            email: format!("user{}@example.com", id),
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            roles: vec!["user".to_string()],
            password_hash: "test-hash".to_string(),
            is_active: true,
            avatar_id: None,
            cover_id: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn roles(mut self, roles: Vec<String>) -> Self {
        self.roles = roles;
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn avatar_id(mut self, avatar_id: i32) -> Self {
        self.avatar_id = Some(avatar_id);
        self
    }

    pub fn cover_id(mut self, cover_id: i32) -> Self {
        self.cover_id = Some(cover_id);
        self
    }

    /// Builds and inserts the person entity.
    pub async fn build(self) -> Result<entity::person::Model, DbErr> {
        let now = Utc::now();
        entity::person::ActiveModel {
            username: ActiveValue::Set(self.username),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            roles: ActiveValue::Set(json!(self.roles)),
            hex: ActiveValue::Set("#3498db".to_string()),
            password_hash: ActiveValue::Set(self.password_hash),
            bio: ActiveValue::Set(String::new()),
            social: ActiveValue::Set(json!({
                "github": "",
                "linkedin": "",
                "twitter": "",
                "instagram": "",
                "facebook": "",
            })),
            avatar_id: ActiveValue::Set(self.avatar_id),
            cover_id: ActiveValue::Set(self.cover_id),
            newsletter: ActiveValue::Set(false),
            is_active: ActiveValue::Set(self.is_active),
            last_login: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a person with default values.
pub async fn create_person(db: &DatabaseConnection) -> Result<entity::person::Model, DbErr> {
    PersonFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::Person;

    #[tokio::test]
    async fn creates_multiple_unique_persons() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Person).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let a = create_person(db).await?;
        let b = create_person(db).await?;

        assert_ne!(a.username, b.username);
        assert_ne!(a.email, b.email);

        Ok(())
    }
}
