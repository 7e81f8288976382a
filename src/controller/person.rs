use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::data::page::PageParams;
use crate::error::AppError;
use crate::model::api::ApiResponse;
use crate::model::person::{
    ChangePasswordDto, CreatePersonDto, PersonListParams, SignInDto, UpdatePersonDto,
};
use crate::service::person::PersonService;
use crate::state::AppState;
use crate::validator;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPersonsQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    pub role: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

/// POST /persons - Create a person.
///
/// Registration is rate-limited per client address. The password and its
/// confirmation are validated (and must match) before any hashing happens.
pub async fn create(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(dto): Json<CreatePersonDto>,
) -> Result<impl IntoResponse, AppError> {
    state.registration_limiter.check(&addr.ip().to_string())?;
    validator::person::validate_create(&dto)?;

    let person = PersonService::new(&state.db).create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Person created successfully", person)),
    ))
}

/// GET /persons - List persons with pagination and filtering.
pub async fn get_all(
    State(state): State<AppState>,
    Query(query): Query<ListPersonsQuery>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(role) = &query.role {
        validator::person::validate_role_filter(role)?;
    }

    let page = PageParams::new(query.page, query.limit);
    let params = PersonListParams {
        role: query.role,
        search: query.search,
        username: query.username,
        email: query.email,
        is_active: query.is_active,
    };

    let result = PersonService::new(&state.db).get_all(&params, page).await?;
    let pagination = result.pagination();

    Ok(Json(ApiResponse::paginated(result.items, pagination)))
}

/// GET /persons/{id} - Fetch one person.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let person = PersonService::new(&state.db).get_by_id(id).await?;
    Ok(Json(ApiResponse::data(person)))
}

/// GET /persons/username/{username} - Fetch one person by unique username.
pub async fn get_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let person = PersonService::new(&state.db).get_by_username(&username).await?;
    Ok(Json(ApiResponse::data(person)))
}

/// PUT /persons/{id} - Partial update; submitted fields only.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdatePersonDto>,
) -> Result<impl IntoResponse, AppError> {
    validator::person::validate_update(&dto)?;

    let person = PersonService::new(&state.db).update(id, dto).await?;

    Ok(Json(ApiResponse::with_message(
        "Person updated successfully",
        person,
    )))
}

/// DELETE /persons/{id} - Hard delete.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    PersonService::new(&state.db).delete(id).await?;
    Ok(Json(ApiResponse::message_only("Person deleted successfully")))
}

/// PUT /persons/{id}/password - Rotate the credential.
///
/// The current password must verify before the new one is accepted.
pub async fn change_password(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    validator::person::validate_change_password(&dto)?;

    PersonService::new(&state.db).change_password(id, dto).await?;

    Ok(Json(ApiResponse::message_only(
        "Password changed successfully",
    )))
}

/// POST /persons/sign-in - Verify credentials by username or email.
///
/// All failure modes return the same invalid-credentials response.
pub async fn sign_in(
    State(state): State<AppState>,
    Json(dto): Json<SignInDto>,
) -> Result<impl IntoResponse, AppError> {
    validator::person::validate_sign_in(&dto)?;

    let session = PersonService::new(&state.db).sign_in(dto).await?;

    Ok(Json(ApiResponse::with_message("Signed in successfully", session)))
}
