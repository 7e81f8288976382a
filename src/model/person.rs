use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::storage::StorageDto;
use crate::model::{from_json, json_value};

/// The closed set of role names a person may carry.
pub const ROLES: [&str; 8] = [
    "user",
    "admin",
    "professor",
    "mentor",
    "orientador",
    "monitor",
    "aluno",
    "pesquisador",
];

pub const DEFAULT_HEX: &str = "#3498db";

/// Social profile links. All fields default to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub facebook: String,
}

/// Full person domain model, including the credential hash.
///
/// This type never crosses the HTTP boundary; responses go through
/// [`PersonDto`], which has no hash field at all.
#[derive(Debug, Clone)]
pub struct Person {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub roles: Vec<String>,
    pub hex: String,
    pub password_hash: String,
    pub bio: String,
    pub social: SocialLinks,
    pub avatar_id: Option<i32>,
    pub cover_id: Option<i32>,
    pub newsletter: bool,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Person {
    pub fn from_entity(e: entity::person::Model) -> Self {
        Self {
            id: e.id,
            username: e.username,
            first_name: e.first_name,
            last_name: e.last_name,
            email: e.email,
            roles: from_json(e.roles),
            hex: e.hex,
            password_hash: e.password_hash,
            bio: e.bio,
            social: from_json(e.social),
            avatar_id: e.avatar_id,
            cover_id: e.cover_id,
            newsletter: e.newsletter,
            is_active: e.is_active,
            last_login: e.last_login,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

/// Public person representation with avatar/cover references resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub roles: Vec<String>,
    pub hex: String,
    pub bio: String,
    pub social: SocialLinks,
    /// The referenced avatar storage record, resolved.
    pub avatar_id: Option<StorageDto>,
    /// The referenced cover storage record, resolved.
    pub cover_id: Option<StorageDto>,
    pub newsletter: bool,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PersonDto {
    /// Explicit public serialization: strips the credential hash and attaches
    /// the resolved storage references.
    pub fn from_person(
        person: Person,
        avatar: Option<StorageDto>,
        cover: Option<StorageDto>,
    ) -> Self {
        Self {
            id: person.id,
            username: person.username,
            first_name: person.first_name,
            last_name: person.last_name,
            email: person.email,
            roles: person.roles,
            hex: person.hex,
            bio: person.bio,
            social: person.social,
            avatar_id: avatar,
            cover_id: cover,
            newsletter: person.newsletter,
            is_active: person.is_active,
            last_login: person.last_login,
            created_at: person.created_at,
            updated_at: person.updated_at,
        }
    }
}

/// Input for creating a person. Social links are accepted either flat
/// (`github`, `linkedin`, …) or as a nested `social` object.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonDto {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub roles: Option<Vec<String>>,
    #[serde(default)]
    pub hex: Option<String>,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub social: Option<SocialLinks>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub avatar_id: Option<i32>,
    #[serde(default)]
    pub cover_id: Option<i32>,
    #[serde(default)]
    pub newsletter: Option<bool>,
}

impl CreatePersonDto {
    /// The effective role set: `roles` wins over the single-role shorthand,
    /// and an empty submission falls back to `["user"]`.
    pub fn effective_roles(&self) -> Vec<String> {
        let roles = match (&self.roles, &self.role) {
            (Some(roles), _) if !roles.is_empty() => roles.clone(),
            (_, Some(role)) => vec![role.clone()],
            _ => vec![],
        };
        if roles.is_empty() {
            vec!["user".to_string()]
        } else {
            roles
        }
    }

    /// Merges the nested social object with the flat shorthand fields; flat
    /// fields win when both are present.
    pub fn social_links(&self) -> SocialLinks {
        let mut social = self.social.clone().unwrap_or_default();
        if let Some(github) = &self.github {
            social.github = github.trim().to_string();
        }
        if let Some(linkedin) = &self.linkedin {
            social.linkedin = linkedin.trim().to_string();
        }
        if let Some(twitter) = &self.twitter {
            social.twitter = twitter.trim().to_string();
        }
        if let Some(instagram) = &self.instagram {
            social.instagram = instagram.trim().to_string();
        }
        if let Some(facebook) = &self.facebook {
            social.facebook = facebook.trim().to_string();
        }
        social
    }
}

/// Partial person update. Password fields are intentionally absent: rotation
/// goes through the dedicated change-password operation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePersonDto {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub roles: Option<Vec<String>>,
    pub hex: Option<String>,
    pub bio: Option<String>,
    pub social: Option<SocialLinks>,
    pub avatar_id: Option<i32>,
    pub cover_id: Option<i32>,
    pub newsletter: Option<bool>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignInDto {
    /// Username or email.
    pub identifier: String,
    pub password: String,
}

/// Payload returned by a successful sign-in.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub person: PersonDto,
    pub last_login: Option<DateTime<Utc>>,
}

/// Insert parameters handed to the repository after validation and hashing.
#[derive(Debug)]
pub struct NewPerson {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub roles: Vec<String>,
    pub hex: String,
    pub password_hash: String,
    pub bio: String,
    pub social: SocialLinks,
    pub avatar_id: Option<i32>,
    pub cover_id: Option<i32>,
    pub newsletter: bool,
}

impl NewPerson {
    pub fn roles_json(&self) -> sea_orm::entity::prelude::Json {
        json_value(&self.roles)
    }

    pub fn social_json(&self) -> sea_orm::entity::prelude::Json {
        json_value(&self.social)
    }
}

/// Filter parameters for the person listing.
#[derive(Debug, Default, Clone)]
pub struct PersonListParams {
    pub role: Option<String>,
    pub search: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}
