//! Person service: CRUD orchestration plus the credential lifecycle.
//!
//! Uniqueness is pre-checked here so collisions surface as clean conflict
//! responses; the database's unique constraints remain as the backstop. All
//! outgoing person data goes through `PersonDto`, which cannot carry the
//! credential hash.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::data::page::{PageParams, Paginated};
use crate::data::person::PersonRepository;
use crate::data::storage::StorageRepository;
use crate::error::AppError;
use crate::model::person::{
    ChangePasswordDto, CreatePersonDto, NewPerson, Person, PersonDto, PersonListParams,
    SignInDto, SignInResponse, UpdatePersonDto, DEFAULT_HEX,
};
use crate::model::storage::StorageDto;
use crate::service::credential;

pub struct PersonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a person: conflict pre-checks, password hashing, insert,
    /// reference resolution.
    ///
    /// The plaintext password and its confirmation were already validated
    /// (including the exact-match rule) before this is called, so hashing is
    /// the only remaining credential step.
    pub async fn create(&self, dto: CreatePersonDto) -> Result<PersonDto, AppError> {
        let repo = PersonRepository::new(self.db);

        let username = dto.username.trim().to_string();
        let email = dto.email.trim().to_string();

        if repo.find_by_username(&username).await?.is_some() {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }
        if repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }

        let password_hash = credential::hash_password(&dto.password)?;

        let person = repo
            .insert(NewPerson {
                username,
                first_name: dto.first_name.trim().to_string(),
                last_name: dto.last_name.trim().to_string(),
                email,
                roles: dto.effective_roles(),
                hex: dto.hex.clone().unwrap_or_else(|| DEFAULT_HEX.to_string()),
                password_hash,
                bio: dto.bio.clone().map(|b| b.trim().to_string()).unwrap_or_default(),
                social: dto.social_links(),
                avatar_id: dto.avatar_id,
                cover_id: dto.cover_id,
                newsletter: dto.newsletter.unwrap_or(false),
            })
            .await?;

        self.resolve_one(person).await
    }

    pub async fn get_all(
        &self,
        params: &PersonListParams,
        page: PageParams,
    ) -> Result<Paginated<PersonDto>, AppError> {
        let repo = PersonRepository::new(self.db);
        let (persons, total) = repo.get_all(params, page).await?;
        let dtos = self.resolve_many(persons).await?;
        Ok(Paginated::new(dtos, total, page))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<PersonDto, AppError> {
        let person = PersonRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Person not found".to_string()))?;
        self.resolve_one(person).await
    }

    pub async fn get_by_username(&self, username: &str) -> Result<PersonDto, AppError> {
        let person = PersonRepository::new(self.db)
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound("Person not found".to_string()))?;
        self.resolve_one(person).await
    }

    /// Applies a partial update; unique fields are conflict-checked against
    /// other records first.
    pub async fn update(&self, id: i32, dto: UpdatePersonDto) -> Result<PersonDto, AppError> {
        let repo = PersonRepository::new(self.db);

        if let Some(username) = &dto.username {
            if let Some(other) = repo.find_by_username(username.trim()).await? {
                if other.id != id {
                    return Err(AppError::Conflict("Username already exists".to_string()));
                }
            }
        }
        if let Some(email) = &dto.email {
            if let Some(other) = repo.find_by_email(email.trim()).await? {
                if other.id != id {
                    return Err(AppError::Conflict("Email already exists".to_string()));
                }
            }
        }

        let person = repo
            .update(id, &dto)
            .await?
            .ok_or_else(|| AppError::NotFound("Person not found".to_string()))?;
        self.resolve_one(person).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PersonRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Person not found".to_string()));
        }
        Ok(())
    }

    /// Rotates the credential: the current password must verify before the
    /// new one is hashed and stored. On mismatch nothing is mutated.
    pub async fn change_password(&self, id: i32, dto: ChangePasswordDto) -> Result<(), AppError> {
        let repo = PersonRepository::new(self.db);
        let person = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Person not found".to_string()))?;

        if !credential::verify_password(&dto.current_password, &person.password_hash) {
            return Err(AppError::InvalidState(
                "Current password is incorrect".to_string(),
            ));
        }

        let new_hash = credential::hash_password(&dto.new_password)?;
        repo.set_password_hash(id, &new_hash).await?;
        Ok(())
    }

    /// Verifies credentials for an identifier (username or email).
    ///
    /// Unknown identifier, inactive account and wrong password all collapse
    /// into the same `InvalidCredentials` outcome so the response never
    /// reveals which case occurred.
    pub async fn sign_in(&self, dto: SignInDto) -> Result<SignInResponse, AppError> {
        let repo = PersonRepository::new(self.db);

        let Some(person) = repo.find_by_identifier(dto.identifier.trim()).await? else {
            return Err(AppError::InvalidCredentials);
        };
        if !person.is_active {
            return Err(AppError::InvalidCredentials);
        }
        if !credential::verify_password(&dto.password, &person.password_hash) {
            return Err(AppError::InvalidCredentials);
        }

        let person = repo
            .set_last_login(person.id)
            .await?
            .ok_or_else(|| AppError::InvalidCredentials)?;

        let last_login = person.last_login;
        let dto = self.resolve_one(person).await?;
        Ok(SignInResponse {
            person: dto,
            last_login,
        })
    }

    async fn resolve_one(&self, person: Person) -> Result<PersonDto, AppError> {
        Ok(self
            .resolve_many(vec![person])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::InternalError("Empty resolution result".to_string()))?)
    }

    /// Attaches avatar/cover storage records with one batched lookup.
    async fn resolve_many(&self, persons: Vec<Person>) -> Result<Vec<PersonDto>, AppError> {
        let mut ids: Vec<i32> = persons
            .iter()
            .flat_map(|p| [p.avatar_id, p.cover_id])
            .flatten()
            .collect();
        ids.sort_unstable();
        ids.dedup();

        let files = StorageRepository::new(self.db).find_by_ids(&ids).await?;
        let by_id: HashMap<i32, entity::storage::Model> =
            files.into_iter().map(|f| (f.id, f)).collect();

        Ok(persons
            .into_iter()
            .map(|person| {
                let avatar = person
                    .avatar_id
                    .and_then(|id| by_id.get(&id).cloned())
                    .map(StorageDto::from_entity);
                let cover = person
                    .cover_id
                    .and_then(|id| by_id.get(&id).cloned())
                    .map(StorageDto::from_entity);
                PersonDto::from_person(person, avatar, cover)
            })
            .collect())
    }
}
