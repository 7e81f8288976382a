use super::*;

/// Only submitted fields change on update.
#[tokio::test]
async fn applies_only_submitted_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    let person = repo.insert(new_person("alice", "alice@example.com")).await?;

    let updated = repo
        .update(
            person.id,
            &UpdatePersonDto {
                bio: Some("New bio".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.bio, "New bio");
    assert_eq!(updated.username, "alice");
    assert_eq!(updated.email, "alice@example.com");

    Ok(())
}

/// Updating a missing person reports absence instead of erroring.
#[tokio::test]
async fn missing_person_yields_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    let result = repo.update(999, &UpdatePersonDto::default()).await?;

    assert!(result.is_none());

    Ok(())
}

/// Credential rotation stores the new hash.
#[tokio::test]
async fn set_password_hash_replaces_the_stored_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    let person = repo.insert(new_person("alice", "alice@example.com")).await?;

    repo.set_password_hash(person.id, "new-hash").await?;

    let reloaded = repo.find_by_id(person.id).await?.unwrap();
    assert_eq!(reloaded.password_hash, "new-hash");

    Ok(())
}
