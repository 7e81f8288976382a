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
use crate::model::post::{AddCommentDto, CreatePostDto, PostListParams, UpdatePostDto};
use crate::service::post::PostService;
use crate::state::AppState;
use crate::validator;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    pub author_id: Option<i32>,
    pub tag: Option<String>,
    #[serde(default)]
    pub include_deleted: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludeDeletedQuery {
    #[serde(default)]
    pub include_deleted: Option<bool>,
}

/// POST /posts - Create a post.
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    validator::post::validate_create(&dto)?;

    let post = PostService::new(&state.db).create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Post created successfully", post)),
    ))
}

/// GET /posts - List posts with pagination and filtering. Soft-deleted posts
/// are excluded unless `includeDeleted=true` is passed.
pub async fn get_all(
    State(state): State<AppState>,
    Query(query): Query<ListPostsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageParams::new(query.page, query.limit);
    let params = PostListParams {
        author_id: query.author_id,
        tag: query.tag,
        search: query.search,
        include_deleted: query.include_deleted.unwrap_or(false),
    };

    let result = PostService::new(&state.db).get_all(&params, page).await?;
    let pagination = result.pagination();

    Ok(Json(ApiResponse::paginated(result.items, pagination)))
}

/// GET /posts/{id} - Fetch one post; pass `includeDeleted=true` to look up a
/// soft-deleted one.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<IncludeDeletedQuery>,
) -> Result<impl IntoResponse, AppError> {
    let post = PostService::new(&state.db)
        .get_by_id(id, query.include_deleted.unwrap_or(false))
        .await?;
    Ok(Json(ApiResponse::data(post)))
}

/// PUT /posts/{id} - Partial update; submitted fields only.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    validator::post::validate_update(&dto)?;

    let post = PostService::new(&state.db).update(id, dto).await?;

    Ok(Json(ApiResponse::with_message("Post updated successfully", post)))
}

/// DELETE /posts/{id} - Soft delete.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    PostService::new(&state.db).delete(id).await?;
    Ok(Json(ApiResponse::message_only("Post deleted successfully")))
}

/// POST /posts/{id}/restore - Undo a soft delete.
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let post = PostService::new(&state.db).restore(id).await?;
    Ok(Json(ApiResponse::with_message(
        "Post restored successfully",
        post,
    )))
}

/// POST /posts/{id}/like - Increment the like counter by one.
pub async fn like(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let likes = PostService::new(&state.db).like(id).await?;
    Ok(Json(ApiResponse::with_message(
        "Post liked successfully",
        json!({ "likes": likes }),
    )))
}

/// POST /posts/{id}/dislike - Increment the dislike counter by one.
pub async fn dislike(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let dislikes = PostService::new(&state.db).dislike(id).await?;
    Ok(Json(ApiResponse::with_message(
        "Post disliked successfully",
        json!({ "dislikes": dislikes }),
    )))
}

/// POST /posts/{id}/comments - Attach a comment reference.
pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<AddCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let post = PostService::new(&state.db)
        .add_comment(id, dto.comment_id)
        .await?;
    Ok(Json(ApiResponse::with_message(
        "Comment added to post successfully",
        post,
    )))
}
