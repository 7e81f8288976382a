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
use crate::model::institution::{
    CreateInstitutionDto, InstitutionListParams, UpdateInstitutionDto,
};
use crate::service::institution::InstitutionService;
use crate::state::AppState;
use crate::validator;

#[derive(Debug, Deserialize)]
pub struct ListInstitutionsQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    pub dominio: Option<String>,
}

/// POST /institutions - Create an institution.
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateInstitutionDto>,
) -> Result<impl IntoResponse, AppError> {
    validator::institution::validate_create(&dto)?;

    let institution = InstitutionService::new(&state.db).create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Institution created successfully",
            institution,
        )),
    ))
}

/// GET /institutions - List institutions with pagination and filtering.
pub async fn get_all(
    State(state): State<AppState>,
    Query(query): Query<ListInstitutionsQuery>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(domain) = &query.dominio {
        validator::institution::validate_domain(domain)?;
    }

    let page = PageParams::new(query.page, query.limit);
    let params = InstitutionListParams {
        domain: query.dominio,
        search: query.search,
    };

    let result = InstitutionService::new(&state.db).get_all(&params, page).await?;
    let pagination = result.pagination();

    Ok(Json(ApiResponse::paginated(result.items, pagination)))
}

/// GET /institutions/{id} - Fetch one institution.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let institution = InstitutionService::new(&state.db).get_by_id(id).await?;
    Ok(Json(ApiResponse::data(institution)))
}

/// GET /institutions/domain/{domain} - All institutions in a domain category.
pub async fn get_by_domain(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    validator::institution::validate_domain(&domain)?;

    let institutions = InstitutionService::new(&state.db).get_by_domain(&domain).await?;
    let count = institutions.len();

    Ok(Json(ApiResponse::listed(institutions, count)))
}

/// PUT /institutions/{id} - Partial update; submitted fields only.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateInstitutionDto>,
) -> Result<impl IntoResponse, AppError> {
    validator::institution::validate_update(&dto)?;

    let institution = InstitutionService::new(&state.db).update(id, dto).await?;

    Ok(Json(ApiResponse::with_message(
        "Institution updated successfully",
        institution,
    )))
}

/// DELETE /institutions/{id} - Hard delete.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    InstitutionService::new(&state.db).delete(id).await?;
    Ok(Json(ApiResponse::message_only(
        "Institution deleted successfully",
    )))
}
