use super::*;

/// Pagination returns bounded slices and an accurate total.
#[tokio::test]
async fn paginates_with_accurate_totals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    for i in 1..=5 {
        repo.insert(new_person(
            &format!("user{}", i),
            &format!("user{}@example.com", i),
        ))
        .await?;
    }

    let params = PersonListParams::default();

    let (page1, total) = repo.get_all(&params, PageParams::new(Some(1), Some(2))).await?;
    assert_eq!(page1.len(), 2);
    assert_eq!(total, 5);

    let (page3, _) = repo.get_all(&params, PageParams::new(Some(3), Some(2))).await?;
    assert_eq!(page3.len(), 1);

    // An out-of-range page is an empty slice, not an error.
    let (page9, total) = repo.get_all(&params, PageParams::new(Some(9), Some(2))).await?;
    assert!(page9.is_empty());
    assert_eq!(total, 5);

    Ok(())
}

/// The role filter matches membership in the JSON role array.
#[tokio::test]
async fn filters_by_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    repo.insert(new_person("alice", "alice@example.com")).await?;

    let mut admin = new_person("bob", "bob@example.com");
    admin.roles = vec!["admin".to_string(), "user".to_string()];
    repo.insert(admin).await?;

    let params = PersonListParams {
        role: Some("admin".to_string()),
        ..Default::default()
    };
    let (admins, total) = repo.get_all(&params, PageParams::default()).await?;

    assert_eq!(total, 1);
    assert_eq!(admins[0].username, "bob");

    Ok(())
}

/// The search clause matches substrings across username, names and email.
#[tokio::test]
async fn searches_across_string_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    repo.insert(new_person("alice", "alice@example.com")).await?;
    repo.insert(new_person("bob", "bob@example.com")).await?;

    let params = PersonListParams {
        search: Some("lice".to_string()),
        ..Default::default()
    };
    let (found, total) = repo.get_all(&params, PageParams::default()).await?;

    assert_eq!(total, 1);
    assert_eq!(found[0].username, "alice");

    Ok(())
}

/// The isActive filter distinguishes deactivated accounts.
#[tokio::test]
async fn filters_by_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    repo.insert(new_person("alice", "alice@example.com")).await?;
    let bob = repo.insert(new_person("bob", "bob@example.com")).await?;
    repo.update(
        bob.id,
        &UpdatePersonDto {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await?;

    let params = PersonListParams {
        is_active: Some(false),
        ..Default::default()
    };
    let (inactive, total) = repo.get_all(&params, PageParams::default()).await?;

    assert_eq!(total, 1);
    assert_eq!(inactive[0].username, "bob");

    Ok(())
}
