//! Person data repository.
//!
//! Handles person persistence including the stored credential hash. Entity
//! rows are converted to the `Person` domain model at this boundary; the
//! public DTO (without the hash) is produced later by the service layer.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::data::page::PageParams;
use crate::model::person::{NewPerson, Person, PersonListParams, UpdatePersonDto};
use crate::model::json_value;

pub struct PersonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new person from the prepared parameter model.
    ///
    /// # Returns
    /// - `Ok(Person)` - The created person
    /// - `Err(DbErr)` - Database error (including unique-constraint violations)
    pub async fn insert(&self, param: NewPerson) -> Result<Person, DbErr> {
        let now = Utc::now();
        let entity = entity::person::ActiveModel {
            username: ActiveValue::Set(param.username.clone()),
            first_name: ActiveValue::Set(param.first_name.clone()),
            last_name: ActiveValue::Set(param.last_name.clone()),
            email: ActiveValue::Set(param.email.clone()),
            roles: ActiveValue::Set(param.roles_json()),
            hex: ActiveValue::Set(param.hex.clone()),
            password_hash: ActiveValue::Set(param.password_hash.clone()),
            bio: ActiveValue::Set(param.bio.clone()),
            social: ActiveValue::Set(param.social_json()),
            avatar_id: ActiveValue::Set(param.avatar_id),
            cover_id: ActiveValue::Set(param.cover_id),
            newsletter: ActiveValue::Set(param.newsletter),
            is_active: ActiveValue::Set(true),
            last_login: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Person::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Person>, DbErr> {
        let entity = entity::prelude::Person::find_by_id(id).one(self.db).await?;
        Ok(entity.map(Person::from_entity))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Person>, DbErr> {
        let entity = entity::prelude::Person::find()
            .filter(entity::person::Column::Username.eq(username))
            .one(self.db)
            .await?;
        Ok(entity.map(Person::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Person>, DbErr> {
        let entity = entity::prelude::Person::find()
            .filter(entity::person::Column::Email.eq(email))
            .one(self.db)
            .await?;
        Ok(entity.map(Person::from_entity))
    }

    /// Looks up a person by username or email in one query, for sign-in.
    pub async fn find_by_identifier(&self, identifier: &str) -> Result<Option<Person>, DbErr> {
        let entity = entity::prelude::Person::find()
            .filter(
                Condition::any()
                    .add(entity::person::Column::Username.eq(identifier))
                    .add(entity::person::Column::Email.eq(identifier)),
            )
            .one(self.db)
            .await?;
        Ok(entity.map(Person::from_entity))
    }

    /// Batch lookup used when resolving author references on posts.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Person>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let entities = entity::prelude::Person::find()
            .filter(entity::person::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;
        Ok(entities.into_iter().map(Person::from_entity).collect())
    }

    /// Gets persons with filtering and pagination, newest first.
    ///
    /// # Returns
    /// - `Ok((persons, total))` - Page of persons and total matching count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(
        &self,
        params: &PersonListParams,
        page: PageParams,
    ) -> Result<(Vec<Person>, u64), DbErr> {
        let mut cond = Condition::all();

        if let Some(role) = &params.role {
            // Membership test against the JSON-encoded role array.
            cond = cond.add(entity::person::Column::Roles.contains(format!("\"{}\"", role)));
        }
        if let Some(username) = &params.username {
            cond = cond.add(entity::person::Column::Username.eq(username));
        }
        if let Some(email) = &params.email {
            cond = cond.add(entity::person::Column::Email.eq(email));
        }
        if let Some(is_active) = params.is_active {
            cond = cond.add(entity::person::Column::IsActive.eq(is_active));
        }
        if let Some(search) = &params.search {
            cond = cond.add(
                Condition::any()
                    .add(entity::person::Column::Username.contains(search.as_str()))
                    .add(entity::person::Column::FirstName.contains(search.as_str()))
                    .add(entity::person::Column::LastName.contains(search.as_str()))
                    .add(entity::person::Column::Email.contains(search.as_str())),
            );
        }

        let paginator = entity::prelude::Person::find()
            .filter(cond)
            .order_by_desc(entity::person::Column::CreatedAt)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.zero_indexed()).await?;

        Ok((entities.into_iter().map(Person::from_entity).collect(), total))
    }

    /// Applies the submitted fields to an existing person.
    ///
    /// Only fields present in the update are touched; `updated_at` is always
    /// refreshed.
    pub async fn update(&self, id: i32, changes: &UpdatePersonDto) -> Result<Option<Person>, DbErr> {
        let Some(existing) = entity::prelude::Person::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::person::ActiveModel = existing.into();

        if let Some(username) = &changes.username {
            active.username = ActiveValue::Set(username.clone());
        }
        if let Some(first_name) = &changes.first_name {
            active.first_name = ActiveValue::Set(first_name.clone());
        }
        if let Some(last_name) = &changes.last_name {
            active.last_name = ActiveValue::Set(last_name.clone());
        }
        if let Some(email) = &changes.email {
            active.email = ActiveValue::Set(email.clone());
        }
        if let Some(roles) = &changes.roles {
            active.roles = ActiveValue::Set(json_value(roles));
        }
        if let Some(hex) = &changes.hex {
            active.hex = ActiveValue::Set(hex.clone());
        }
        if let Some(bio) = &changes.bio {
            active.bio = ActiveValue::Set(bio.clone());
        }
        if let Some(social) = &changes.social {
            active.social = ActiveValue::Set(json_value(social));
        }
        if let Some(avatar_id) = changes.avatar_id {
            active.avatar_id = ActiveValue::Set(Some(avatar_id));
        }
        if let Some(cover_id) = changes.cover_id {
            active.cover_id = ActiveValue::Set(Some(cover_id));
        }
        if let Some(newsletter) = changes.newsletter {
            active.newsletter = ActiveValue::Set(newsletter);
        }
        if let Some(is_active) = changes.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Person::from_entity(active.update(self.db).await?)))
    }

    /// Stores a freshly computed credential hash.
    pub async fn set_password_hash(&self, id: i32, password_hash: &str) -> Result<(), DbErr> {
        entity::prelude::Person::update_many()
            .filter(entity::person::Column::Id.eq(id))
            .col_expr(
                entity::person::Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .col_expr(
                entity::person::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Records a successful sign-in.
    pub async fn set_last_login(&self, id: i32) -> Result<Option<Person>, DbErr> {
        entity::prelude::Person::update_many()
            .filter(entity::person::Column::Id.eq(id))
            .col_expr(
                entity::person::Column::LastLogin,
                sea_orm::sea_query::Expr::value(Some(Utc::now())),
            )
            .exec(self.db)
            .await?;
        self.find_by_id(id).await
    }

    /// Hard-deletes a person.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No person with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Person::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
