//! Password hashing and verification.
//!
//! Explicit service-layer functions, called deliberately by the person
//! service. There is no hidden save-hook anywhere: a plaintext password goes
//! through `hash_password` exactly once, before persistence, and the stored
//! PHC string never leaves the data layer.

use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use crate::error::AppError;

/// Hashes a plaintext password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored PHC-string hash.
///
/// An unparsable stored hash verifies as `false` rather than erroring, so a
/// corrupt credential row behaves like a wrong password.
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_the_original_password_and_rejects_others() {
        let hash = hash_password("Str0ng!pass").unwrap();

        assert!(verify_password("Str0ng!pass", &hash));
        assert!(!verify_password("Wr0ng!pass", &hash));
    }

    #[test]
    fn salts_make_equal_passwords_hash_differently() {
        let a = hash_password("Str0ng!pass").unwrap();
        let b = hash_password("Str0ng!pass").unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn garbage_stored_hash_fails_verification() {
        assert!(!verify_password("Str0ng!pass", "not-a-phc-string"));
    }
}
