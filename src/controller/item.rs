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
use crate::model::item::{CreateItemDto, ItemListParams, UpdateItemDto};
use crate::service::item::ItemService;
use crate::state::AppState;
use crate::validator;

#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
}

/// POST /items - Create an item.
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    validator::item::validate_create(&dto)?;

    let item = ItemService::new(&state.db).create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Item created successfully", item)),
    ))
}

/// GET /items - List items with pagination and filtering.
pub async fn get_all(
    State(state): State<AppState>,
    Query(query): Query<ListItemsQuery>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(item_type) = &query.item_type {
        validator::item::validate_type_filter(item_type)?;
    }

    let page = PageParams::new(query.page, query.limit);
    let params = ItemListParams {
        item_type: query.item_type,
        search: query.search,
    };

    let result = ItemService::new(&state.db).get_all(&params, page).await?;
    let pagination = result.pagination();

    Ok(Json(ApiResponse::paginated(result.items, pagination)))
}

/// GET /items/{id} - Fetch one item.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let item = ItemService::new(&state.db).get_by_id(id).await?;
    Ok(Json(ApiResponse::data(item)))
}

/// PUT /items/{id} - Partial update; submitted fields only.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    validator::item::validate_update(&dto)?;

    let item = ItemService::new(&state.db).update(id, dto).await?;

    Ok(Json(ApiResponse::with_message("Item updated successfully", item)))
}

/// DELETE /items/{id} - Hard delete.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ItemService::new(&state.db).delete(id).await?;
    Ok(Json(ApiResponse::message_only("Item deleted successfully")))
}

/// POST /items/{id}/like - Increment the like counter by one.
pub async fn like(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let likes = ItemService::new(&state.db).like(id).await?;
    Ok(Json(ApiResponse::with_message(
        "Item liked successfully",
        json!({ "likes": likes }),
    )))
}

/// POST /items/{id}/dislike - Increment the dislike counter by one.
pub async fn dislike(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let dislikes = ItemService::new(&state.db).dislike(id).await?;
    Ok(Json(ApiResponse::with_message(
        "Item disliked successfully",
        json!({ "dislikes": dislikes }),
    )))
}
