use super::*;

/// Inserting a person persists all fields and decodes the JSON columns back
/// into typed values.
#[tokio::test]
async fn inserts_and_reads_back() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    let person = repo.insert(new_person("alice", "alice@example.com")).await?;

    assert_eq!(person.username, "alice");
    assert_eq!(person.roles, vec!["user"]);
    assert!(person.is_active);
    assert!(person.last_login.is_none());

    let found = repo.find_by_id(person.id).await?.unwrap();
    assert_eq!(found.email, "alice@example.com");

    Ok(())
}

/// The unique constraint on username rejects a second insert.
#[tokio::test]
async fn duplicate_username_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    repo.insert(new_person("alice", "alice@example.com")).await?;

    let result = repo.insert(new_person("alice", "other@example.com")).await;
    assert!(result.is_err());

    Ok(())
}

/// Sign-in lookups resolve both the username and the email.
#[tokio::test]
async fn find_by_identifier_matches_username_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    repo.insert(new_person("alice", "alice@example.com")).await?;

    assert!(repo.find_by_identifier("alice").await?.is_some());
    assert!(repo.find_by_identifier("alice@example.com").await?.is_some());
    assert!(repo.find_by_identifier("nobody").await?.is_none());

    Ok(())
}
