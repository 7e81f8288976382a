use super::*;

/// Courses list alphabetically by name, not by creation time.
#[tokio::test]
async fn orders_courses_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CourseFactory::new(db).name("Zoologia").build().await?;
    CourseFactory::new(db).name("Arquitetura").build().await?;
    CourseFactory::new(db).name("Medicina").build().await?;

    let repo = CourseRepository::new(db);
    let (courses, _) = repo
        .get_all(&CourseListParams::default(), PageParams::default())
        .await?;

    let names: Vec<&str> = courses.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Arquitetura", "Medicina", "Zoologia"]);

    Ok(())
}

/// The duration filter matches exactly.
#[tokio::test]
async fn filters_by_duration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CourseFactory::new(db).duration_years(4).build().await?;
    CourseFactory::new(db).duration_years(5).build().await?;
    CourseFactory::new(db).duration_years(5).build().await?;

    let repo = CourseRepository::new(db);
    let params = CourseListParams {
        duration_years: Some(5),
        ..Default::default()
    };
    let (courses, total) = repo.get_all(&params, PageParams::default()).await?;

    assert_eq!(total, 2);
    assert!(courses.iter().all(|c| c.duration_years == 5));

    let by_duration = repo.get_by_duration(4).await?;
    assert_eq!(by_duration.len(), 1);

    Ok(())
}

/// Abbreviation lookup matches the stored (upper-cased) value.
#[tokio::test]
async fn finds_by_abbr() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CourseFactory::new(db).abbr("ENG").build().await?;

    let repo = CourseRepository::new(db);
    assert!(repo.find_by_abbr("ENG").await?.is_some());
    assert!(repo.find_by_abbr("XYZ").await?.is_none());

    Ok(())
}
