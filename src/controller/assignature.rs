use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::data::page::PageParams;
use crate::error::AppError;
use crate::model::api::ApiResponse;
use crate::model::assignature::{
    AssignatureListParams, CreateAssignatureDto, UpdateAssignatureDto,
};
use crate::service::assignature::AssignatureService;
use crate::state::AppState;
use crate::validator;

#[derive(Debug, Deserialize)]
pub struct ListAssignaturesQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub assignature_type: Option<String>,
}

/// POST /assignatures - Create an assignature.
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateAssignatureDto>,
) -> Result<impl IntoResponse, AppError> {
    validator::assignature::validate_create(&dto)?;

    let assignature = AssignatureService::new(&state.db).create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Assignature created successfully",
            assignature,
        )),
    ))
}

/// GET /assignatures - List assignatures with pagination and filtering.
pub async fn get_all(
    State(state): State<AppState>,
    Query(query): Query<ListAssignaturesQuery>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(assignature_type) = &query.assignature_type {
        validator::assignature::validate_type_filter(assignature_type)?;
    }

    let page = PageParams::new(query.page, query.limit);
    let params = AssignatureListParams {
        assignature_type: query.assignature_type,
        search: query.search,
    };

    let result = AssignatureService::new(&state.db).get_all(&params, page).await?;
    let pagination = result.pagination();

    Ok(Json(ApiResponse::paginated(result.items, pagination)))
}

/// GET /assignatures/{id} - Fetch one assignature.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let assignature = AssignatureService::new(&state.db).get_by_id(id).await?;
    Ok(Json(ApiResponse::data(assignature)))
}

/// PUT /assignatures/{id} - Partial update; submitted fields only.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateAssignatureDto>,
) -> Result<impl IntoResponse, AppError> {
    validator::assignature::validate_update(&dto)?;

    let assignature = AssignatureService::new(&state.db).update(id, dto).await?;

    Ok(Json(ApiResponse::with_message(
        "Assignature updated successfully",
        assignature,
    )))
}

/// DELETE /assignatures/{id} - Hard delete.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AssignatureService::new(&state.db).delete(id).await?;
    Ok(Json(ApiResponse::message_only(
        "Assignature deleted successfully",
    )))
}

/// POST /assignatures/{id}/like - Increment the like counter by one.
pub async fn like(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let likes = AssignatureService::new(&state.db).like(id).await?;
    Ok(Json(ApiResponse::with_message(
        "Assignature liked successfully",
        json!({ "likes": likes }),
    )))
}

/// POST /assignatures/{id}/dislike - Increment the dislike counter by one.
pub async fn dislike(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let dislikes = AssignatureService::new(&state.db).dislike(id).await?;
    Ok(Json(ApiResponse::with_message(
        "Assignature disliked successfully",
        json!({ "dislikes": dislikes }),
    )))
}
