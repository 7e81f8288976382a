use super::*;

/// Variations behave as a set on add and remove every occurrence on pull.
#[tokio::test]
async fn add_is_set_like_and_remove_pulls() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = CourseFactory::new(db).build().await?;

    let repo = CourseRepository::new(db);
    repo.add_variation(course.id, "Engenharia Civil").await?;
    repo.add_variation(course.id, "Eng. Civil").await?;
    let unchanged = repo.add_variation(course.id, "Engenharia Civil").await?.unwrap();

    let variations: Vec<String> = from_json(unchanged.variations);
    assert_eq!(variations, vec!["Engenharia Civil", "Eng. Civil"]);

    let removed = repo.remove_variation(course.id, "Engenharia Civil").await?.unwrap();
    let variations: Vec<String> = from_json(removed.variations);
    assert_eq!(variations, vec!["Eng. Civil"]);

    Ok(())
}

/// Variation operations on a missing course report absence.
#[tokio::test]
async fn missing_course_yields_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    assert!(repo.add_variation(999, "x").await?.is_none());
    assert!(repo.remove_variation(999, "x").await?.is_none());

    Ok(())
}
