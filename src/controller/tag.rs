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
use crate::model::tag::{CreateTagDto, TagListParams, UpdateTagDto};
use crate::service::tag::TagService;
use crate::state::AppState;
use crate::validator;

#[derive(Debug, Deserialize)]
pub struct ListTagsQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PopularTagsQuery {
    pub limit: Option<u64>,
}

/// POST /tags - Create a tag.
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateTagDto>,
) -> Result<impl IntoResponse, AppError> {
    validator::tag::validate_create(&dto)?;

    let tag = TagService::new(&state.db).create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Tag created successfully", tag)),
    ))
}

/// GET /tags - List tags with pagination and filtering.
pub async fn get_all(
    State(state): State<AppState>,
    Query(query): Query<ListTagsQuery>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(color) = &query.color {
        validator::tag::validate_color(color)?;
    }

    let page = PageParams::new(query.page, query.limit);
    let params = TagListParams {
        search: query.search,
        color: query.color,
    };

    let result = TagService::new(&state.db).get_all(&params, page).await?;
    let pagination = result.pagination();

    Ok(Json(ApiResponse::paginated(result.items, pagination)))
}

/// GET /tags/popular - Most recently created tags, up to `limit`.
pub async fn get_popular(
    State(state): State<AppState>,
    Query(query): Query<PopularTagsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let limit = query.limit.unwrap_or(10).clamp(1, 100);
    let tags = TagService::new(&state.db).get_popular(limit).await?;
    let count = tags.len();

    Ok(Json(ApiResponse::listed(tags, count)))
}

/// GET /tags/{id} - Fetch one tag.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let tag = TagService::new(&state.db).get_by_id(id).await?;
    Ok(Json(ApiResponse::data(tag)))
}

/// GET /tags/name/{tagName} - Fetch one tag by unique name.
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(tag_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let tag = TagService::new(&state.db).get_by_name(&tag_name).await?;
    Ok(Json(ApiResponse::data(tag)))
}

/// GET /tags/color/{color} - All tags with an exact color.
pub async fn get_by_color(
    State(state): State<AppState>,
    Path(color): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let tags = TagService::new(&state.db).get_by_color(&color).await?;
    let count = tags.len();

    Ok(Json(ApiResponse::listed(tags, count)))
}

/// PUT /tags/{id} - Partial update; submitted fields only.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateTagDto>,
) -> Result<impl IntoResponse, AppError> {
    validator::tag::validate_update(&dto)?;

    let tag = TagService::new(&state.db).update(id, dto).await?;

    Ok(Json(ApiResponse::with_message("Tag updated successfully", tag)))
}

/// DELETE /tags/{id} - Hard delete.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    TagService::new(&state.db).delete(id).await?;
    Ok(Json(ApiResponse::message_only("Tag deleted successfully")))
}
