use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::data::page::PageParams;
use crate::error::AppError;
use crate::model::api::ApiResponse;
use crate::model::course::{
    CourseListParams, CreateCourseDto, UpdateCourseDto, VariationDto,
};
use crate::service::course::CourseService;
use crate::state::AppState;
use crate::validator;

#[derive(Debug, Deserialize)]
pub struct ListCoursesQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    pub anos: Option<i32>,
    pub abbr: Option<String>,
}

/// POST /courses - Create a course. The abbreviation is stored upper-cased.
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    validator::course::validate_create(&dto)?;

    let course = CourseService::new(&state.db).create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Course created successfully", course)),
    ))
}

/// GET /courses - List courses with pagination and filtering, ordered by
/// name.
pub async fn get_all(
    State(state): State<AppState>,
    Query(query): Query<ListCoursesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageParams::new(query.page, query.limit);
    let params = CourseListParams {
        duration_years: query.anos,
        abbr: query.abbr,
        search: query.search,
    };

    let result = CourseService::new(&state.db).get_all(&params, page).await?;
    let pagination = result.pagination();

    Ok(Json(ApiResponse::paginated(result.items, pagination)))
}

/// GET /courses/{id} - Fetch one course.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db).get_by_id(id).await?;
    Ok(Json(ApiResponse::data(course)))
}

/// GET /courses/abbr/{abbr} - Fetch one course by abbreviation,
/// case-insensitively.
pub async fn get_by_abbr(
    State(state): State<AppState>,
    Path(abbr): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db).get_by_abbr(&abbr).await?;
    Ok(Json(ApiResponse::data(course)))
}

/// GET /courses/duration/{anos} - All courses with the given duration.
pub async fn get_by_duration(
    State(state): State<AppState>,
    Path(anos): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !(1..=10).contains(&anos) {
        return Err(AppError::BadRequest(
            "Duration must be a number between 1 and 10".to_string(),
        ));
    }

    let courses = CourseService::new(&state.db).get_by_duration(anos).await?;
    let count = courses.len();

    Ok(Json(ApiResponse::listed(courses, count)))
}

/// PUT /courses/{id} - Partial update; submitted fields only.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    validator::course::validate_update(&dto)?;

    let course = CourseService::new(&state.db).update(id, dto).await?;

    Ok(Json(ApiResponse::with_message("Course updated successfully", course)))
}

/// DELETE /courses/{id} - Hard delete.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    CourseService::new(&state.db).delete(id).await?;
    Ok(Json(ApiResponse::message_only("Course deleted successfully")))
}

/// POST /courses/{id}/variations - Add a name variation (set semantics).
pub async fn add_variation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<VariationDto>,
) -> Result<impl IntoResponse, AppError> {
    validator::course::validate_variation(&dto)?;

    let course = CourseService::new(&state.db)
        .add_variation(id, &dto.variation)
        .await?;

    Ok(Json(ApiResponse::with_message(
        "Variation added successfully",
        course,
    )))
}

/// DELETE /courses/{id}/variations - Remove a name variation.
pub async fn remove_variation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<VariationDto>,
) -> Result<impl IntoResponse, AppError> {
    validator::course::validate_variation(&dto)?;

    let course = CourseService::new(&state.db)
        .remove_variation(id, &dto.variation)
        .await?;

    Ok(Json(ApiResponse::with_message(
        "Variation removed successfully",
        course,
    )))
}
