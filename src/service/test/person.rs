use test_utils::builder::TestBuilder;
use test_utils::factory::person::PersonFactory;

use crate::error::AppError;
use crate::model::person::{ChangePasswordDto, CreatePersonDto, SignInDto};
use crate::service::credential;
use crate::service::person::PersonService;

fn create_dto(username: &str, email: &str) -> CreatePersonDto {
    CreatePersonDto {
        username: username.to_string(),
        first_name: "Alice".to_string(),
        last_name: "Silva".to_string(),
        email: email.to_string(),
        role: None,
        roles: None,
        hex: None,
        password: "Str0ng!pass1".to_string(),
        confirm_password: "Str0ng!pass1".to_string(),
        bio: None,
        social: None,
        github: Some("https://github.com/alice".to_string()),
        linkedin: None,
        twitter: None,
        instagram: None,
        facebook: None,
        avatar_id: None,
        cover_id: None,
        newsletter: None,
    }
}

/// Creating two persons with the same username yields one success and one
/// conflict.
#[tokio::test]
async fn duplicate_username_conflicts() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PersonService::new(db);
    service
        .create(create_dto("alice", "alice@example.com"))
        .await
        .unwrap();

    let err = service
        .create(create_dto("alice", "second@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
}

/// The serialized person never carries a password-hash field, on any path.
#[tokio::test]
async fn serialized_person_never_contains_the_hash() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PersonService::new(db);
    let created = service
        .create(create_dto("alice", "alice@example.com"))
        .await
        .unwrap();

    let body = serde_json::to_string(&created).unwrap();
    assert!(!body.contains("passwordHash"));
    assert!(!body.contains("password"));
    assert!(!body.contains("argon2"));

    let fetched = service.get_by_id(created.id).await.unwrap();
    let body = serde_json::to_string(&fetched).unwrap();
    assert!(!body.contains("passwordHash"));

    let session = service
        .sign_in(SignInDto {
            identifier: "alice".to_string(),
            password: "Str0ng!pass1".to_string(),
        })
        .await
        .unwrap();
    let body = serde_json::to_string(&session).unwrap();
    assert!(!body.contains("passwordHash"));
    assert!(!body.contains("argon2"));
}

/// Defaults fill in when the client omits optional fields, and flat social
/// shorthand fields land in the social object.
#[tokio::test]
async fn create_applies_defaults_and_social_shorthand() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = PersonService::new(db)
        .create(create_dto("alice", "alice@example.com"))
        .await
        .unwrap();

    assert_eq!(created.roles, vec!["user"]);
    assert_eq!(created.hex, "#3498db");
    assert!(created.is_active);
    assert!(!created.newsletter);
    assert_eq!(created.social.github, "https://github.com/alice");
}

/// Unknown identifier, wrong password and an inactive account all produce
/// the identical invalid-credentials outcome.
#[tokio::test]
async fn sign_in_failures_are_indistinguishable() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PersonService::new(db);
    service
        .create(create_dto("alice", "alice@example.com"))
        .await
        .unwrap();

    let hash = credential::hash_password("Str0ng!pass1").unwrap();
    PersonFactory::new(db)
        .username("inactive")
        .password_hash(hash)
        .active(false)
        .build()
        .await
        .unwrap();

    let unknown = service
        .sign_in(SignInDto {
            identifier: "nobody".to_string(),
            password: "Str0ng!pass1".to_string(),
        })
        .await
        .unwrap_err();
    let wrong_password = service
        .sign_in(SignInDto {
            identifier: "alice".to_string(),
            password: "Wrong!pass1".to_string(),
        })
        .await
        .unwrap_err();
    let inactive = service
        .sign_in(SignInDto {
            identifier: "inactive".to_string(),
            password: "Str0ng!pass1".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(unknown, AppError::InvalidCredentials));
    assert!(matches!(wrong_password, AppError::InvalidCredentials));
    assert!(matches!(inactive, AppError::InvalidCredentials));
}

/// A successful sign-in records the login timestamp.
#[tokio::test]
async fn sign_in_records_last_login() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PersonService::new(db);
    service
        .create(create_dto("alice", "alice@example.com"))
        .await
        .unwrap();

    let session = service
        .sign_in(SignInDto {
            identifier: "alice@example.com".to_string(),
            password: "Str0ng!pass1".to_string(),
        })
        .await
        .unwrap();

    assert!(session.last_login.is_some());
}

/// Password rotation requires the current password; a mismatch mutates
/// nothing.
#[tokio::test]
async fn change_password_verifies_the_current_one_first() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PersonService::new(db);
    let created = service
        .create(create_dto("alice", "alice@example.com"))
        .await
        .unwrap();

    let err = service
        .change_password(
            created.id,
            ChangePasswordDto {
                current_password: "Wrong!pass1".to_string(),
                new_password: "N3w!password".to_string(),
                confirm_password: "N3w!password".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));

    // The old password still works.
    service
        .sign_in(SignInDto {
            identifier: "alice".to_string(),
            password: "Str0ng!pass1".to_string(),
        })
        .await
        .unwrap();

    // With the correct current password the rotation goes through.
    service
        .change_password(
            created.id,
            ChangePasswordDto {
                current_password: "Str0ng!pass1".to_string(),
                new_password: "N3w!password".to_string(),
                confirm_password: "N3w!password".to_string(),
            },
        )
        .await
        .unwrap();

    service
        .sign_in(SignInDto {
            identifier: "alice".to_string(),
            password: "N3w!password".to_string(),
        })
        .await
        .unwrap();
}
