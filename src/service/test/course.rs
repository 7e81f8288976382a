use test_utils::builder::TestBuilder;

use crate::error::AppError;
use crate::model::course::CreateCourseDto;
use crate::service::course::CourseService;

fn engineering() -> CreateCourseDto {
    CreateCourseDto {
        name: "Engenharia".to_string(),
        duration_years: 5,
        abbr: "eng".to_string(),
        variations: None,
    }
}

/// The abbreviation is stored upper-cased, and a duplicate course name is a
/// conflict.
#[tokio::test]
async fn create_normalizes_abbr_and_conflicts_on_duplicate_name() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CourseService::new(db);
    let created = service.create(engineering()).await.unwrap();
    assert_eq!(created.abbr, "ENG");

    let err = service.create(engineering()).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

/// Abbreviation lookup is case-insensitive.
#[tokio::test]
async fn get_by_abbr_ignores_case() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CourseService::new(db);
    service.create(engineering()).await.unwrap();

    let found = service.get_by_abbr("eNg").await.unwrap();
    assert_eq!(found.name, "Engenharia");
}

/// Variations follow set semantics via the service as well.
#[tokio::test]
async fn variations_add_and_remove() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CourseService::new(db);
    let course = service.create(engineering()).await.unwrap();

    service.add_variation(course.id, "Engenharia Civil").await.unwrap();
    let unchanged = service
        .add_variation(course.id, "Engenharia Civil")
        .await
        .unwrap();
    assert_eq!(unchanged.variations, vec!["Engenharia Civil"]);

    let removed = service
        .remove_variation(course.id, "Engenharia Civil")
        .await
        .unwrap();
    assert!(removed.variations.is_empty());
}
