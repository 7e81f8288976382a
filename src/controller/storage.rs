use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::controller::upload::{file_response, read_upload};
use crate::data::page::PageParams;
use crate::error::AppError;
use crate::model::api::ApiResponse;
use crate::model::storage::{CreateStorageDto, StorageListParams, UpdateStorageDto};
use crate::service::storage::StorageService;
use crate::state::AppState;
use crate::validator;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListStorageQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    pub file_type: Option<String>,
    #[serde(default)]
    pub include_deleted: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludeDeletedQuery {
    #[serde(default)]
    pub include_deleted: Option<bool>,
}

/// POST /storage - Create a metadata record for an already-hosted file.
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateStorageDto>,
) -> Result<impl IntoResponse, AppError> {
    validator::storage::validate_create(&dto)?;

    let record = StorageService::new(&state.db).create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Storage created successfully", record)),
    ))
}

/// GET /storage - List storage records with pagination and filtering.
/// Soft-deleted records are excluded unless `includeDeleted=true` is passed.
pub async fn get_all(
    State(state): State<AppState>,
    Query(query): Query<ListStorageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageParams::new(query.page, query.limit);
    let params = StorageListParams {
        search: query.search,
        file_type: query.file_type,
        include_deleted: query.include_deleted.unwrap_or(false),
    };

    let result = StorageService::new(&state.db).get_all(&params, page).await?;
    let pagination = result.pagination();

    Ok(Json(ApiResponse::paginated(result.items, pagination)))
}

/// GET /storage/{id} - Fetch one record; pass `includeDeleted=true` to look
/// up a soft-deleted one.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<IncludeDeletedQuery>,
) -> Result<impl IntoResponse, AppError> {
    let record = StorageService::new(&state.db)
        .get_by_id(id, query.include_deleted.unwrap_or(false))
        .await?;
    Ok(Json(ApiResponse::data(record)))
}

/// PUT /storage/{id} - Partial update; submitted fields only.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateStorageDto>,
) -> Result<impl IntoResponse, AppError> {
    validator::storage::validate_update(&dto)?;

    let record = StorageService::new(&state.db).update(id, dto).await?;

    Ok(Json(ApiResponse::with_message(
        "Storage updated successfully",
        record,
    )))
}

/// DELETE /storage/{id} - Soft delete; the on-disk file is kept.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    StorageService::new(&state.db).delete(id).await?;
    Ok(Json(ApiResponse::message_only("Storage deleted successfully")))
}

/// POST /storage/{id}/restore - Undo a soft delete.
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let record = StorageService::new(&state.db).restore(id).await?;
    Ok(Json(ApiResponse::with_message(
        "Storage restored successfully",
        record,
    )))
}

/// POST /storage/upload - Upload a file and create its storage record.
pub async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let file = read_upload(multipart).await?;

    let record = StorageService::new(&state.db)
        .store_upload(file, &state.public_url, &state.storage_path)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("File uploaded successfully", record)),
    ))
}

/// GET /storage/{id}/download - Download the physical file.
pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let handle = StorageService::new(&state.db)
        .file_handle(id, &state.storage_path)
        .await?;
    let bytes = tokio::fs::read(&handle.path).await?;
    file_response(&handle, bytes, true)
}
