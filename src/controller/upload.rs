//! Upload surface: physical file upload, retrieval, download, inline view
//! and hard deletion. Shares the storage table with the `/storage` routes
//! but removes rows (and files) physically instead of soft-deleting.

use axum::{
    extract::{Multipart, Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::AppError;
use crate::model::api::ApiResponse;
use crate::model::storage::UploadedFile;
use crate::service::storage::{FileHandle, StorageService};
use crate::state::AppState;

/// Pulls the first file field out of a multipart form.
pub(crate) async fn read_upload(mut multipart: Multipart) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.file_name().is_none() {
            continue;
        }
        let original_name = field.file_name().map(ToString::to_string);
        let mimetype = field.content_type().map(ToString::to_string);
        let bytes = field.bytes().await?.to_vec();
        return Ok(UploadedFile {
            original_name,
            mimetype,
            bytes,
        });
    }
    Err(AppError::BadRequest("No file uploaded".to_string()))
}

/// Builds a file-serving response; `attachment` controls the
/// Content-Disposition header (download vs inline view).
pub(crate) fn file_response(
    handle: &FileHandle,
    bytes: Vec<u8>,
    attachment: bool,
) -> Result<Response, AppError> {
    let mimetype = handle
        .mimetype
        .as_deref()
        .unwrap_or("application/octet-stream");
    let content_type = HeaderValue::from_str(mimetype)
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));

    let mut response = (StatusCode::OK, bytes).into_response();
    response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    if attachment {
        let disposition = format!("attachment; filename=\"{}\"", handle.download_name);
        let disposition = HeaderValue::from_str(&disposition)
            .unwrap_or_else(|_| HeaderValue::from_static("attachment"));
        response
            .headers_mut()
            .insert(header::CONTENT_DISPOSITION, disposition);
    }
    Ok(response)
}

/// POST /uploads - Upload a file and create its storage record.
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

/// GET /uploads/{id} - Fetch the file's metadata record.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let record = StorageService::new(&state.db).get_by_id(id, false).await?;
    Ok(Json(ApiResponse::data(record)))
}

/// GET /uploads/{id}/download - Download the physical file, named after its
/// original upload name.
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

/// GET /uploads/{id}/view - Serve the file inline for browser viewing.
pub async fn view(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let handle = StorageService::new(&state.db)
        .file_handle(id, &state.storage_path)
        .await?;
    let bytes = tokio::fs::read(&handle.path).await?;
    file_response(&handle, bytes, false)
}

/// DELETE /uploads/{id} - Remove the record and the on-disk file.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = StorageService::new(&state.db)
        .hard_delete(id, &state.storage_path)
        .await?;

    Ok(Json(ApiResponse::with_message(
        "File removed successfully",
        deleted,
    )))
}
