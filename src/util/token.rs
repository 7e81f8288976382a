//! JWT signing and verification helpers.
//!
//! Configured through `JWT_SECRET_KEY` / `JWT_EXPIRES_IN_SECS` and available
//! to callers that need signed identity tokens; no route currently mounts
//! token verification as a guard.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::model::person::Person;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Person id.
    pub sub: String,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
    pub iat: i64,
    pub exp: i64,
}

/// Signs an identity token for a person.
pub fn sign(secret: &str, expires_in_secs: i64, person: &Person) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: person.id.to_string(),
        username: person.username.clone(),
        email: person.email.clone(),
        roles: person.roles.clone(),
        iat: now,
        exp: now + expires_in_secs,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))
}

/// Verifies a token, returning its claims when valid and unexpired.
pub fn verify(secret: &str, token: &str) -> Option<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_person() -> Person {
        Person {
            id: 7,
            username: "alice".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Silva".to_string(),
            email: "alice@example.com".to_string(),
            roles: vec!["user".to_string()],
            hex: "#3498db".to_string(),
            password_hash: "irrelevant".to_string(),
            bio: String::new(),
            social: Default::default(),
            avatar_id: None,
            cover_id: None,
            newsletter: false,
            is_active: true,
            last_login: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn round_trips_claims() {
        let token = sign("secret", 3600, &sample_person()).unwrap();
        let claims = verify("secret", &token).unwrap();

        assert_eq!(claims.sub, "7");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.roles, vec!["user"]);
    }

    #[test]
    fn rejects_a_wrong_secret() {
        let token = sign("secret", 3600, &sample_person()).unwrap();
        assert!(verify("other-secret", &token).is_none());
    }

    #[test]
    fn rejects_an_expired_token() {
        let token = sign("secret", -3600, &sample_person()).unwrap();
        assert!(verify("secret", &token).is_none());
    }
}
