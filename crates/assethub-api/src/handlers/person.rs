//! Person handlers: CRUD, assignment history, and offboarding.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use assethub_core::error::AppError;
use assethub_core::types::pagination::PageResponse;
use assethub_entity::person::Person;
use assethub_service::lifecycle::OffboardingReport;
use assethub_service::person::PersonAssignment;

use crate::dto::request::{CreatePersonRequest, OffboardRequest, UpdatePersonRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// Person list query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonSearchParams {
    /// Case-insensitive name/username search.
    pub search: Option<String>,
}

/// GET /api/people
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PersonSearchParams>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Person>>>, ApiError> {
    let page = state
        .people
        .list(params.search.as_deref(), &pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/people
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreatePersonRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Person>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let person = state.people.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(person))))
}

/// GET /api/people/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Person>>, ApiError> {
    let person = state.people.get(id).await?;
    Ok(Json(ApiResponse::ok(person)))
}

/// PATCH /api/people/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePersonRequest>,
) -> Result<Json<ApiResponse<Person>>, ApiError> {
    let person = state.people.patch(id, req.into()).await?;
    Ok(Json(ApiResponse::ok(person)))
}

/// DELETE /api/people/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.people.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/people/{id}/assignments
pub async fn assignments(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<PersonAssignment>>>, ApiError> {
    let history = state.people.assignments(id).await?;
    Ok(Json(ApiResponse::ok(history)))
}

/// POST /api/people/{id}/offboard
pub async fn offboard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<OffboardRequest>,
) -> Result<Json<ApiResponse<OffboardingReport>>, ApiError> {
    let report = state.offboarding.offboard(id, req.into()).await?;
    Ok(Json(ApiResponse::ok(report)))
}
