//! Asset handlers: CRUD, lifecycle transitions, and the audit trail.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use assethub_core::error::AppError;
use assethub_core::types::filter::AssetFilter;
use assethub_core::types::pagination::PageResponse;
use assethub_entity::asset::{Asset, AssetStatus};
use assethub_entity::event::AssetEvent;
use assethub_service::asset::AssetDetails;
use assethub_service::lifecycle::{CascadeOutcome, TransitionRequest};

use crate::dto::request::{CreateAssetRequest, TransitionActionRequest, UpdateAssetRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// Asset list filter query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetFilterParams {
    /// Only assets in this lifecycle status.
    pub status: Option<AssetStatus>,
    /// Only assets of this type.
    pub asset_type_id: Option<Uuid>,
    /// Only assets at this location.
    pub location_id: Option<Uuid>,
    /// Only assets currently held by this person.
    pub person_id: Option<Uuid>,
    /// Free-text search over tag/serial/description.
    pub search: Option<String>,
}

impl From<AssetFilterParams> for AssetFilter {
    fn from(params: AssetFilterParams) -> Self {
        Self {
            status: params.status,
            asset_type_id: params.asset_type_id,
            location_id: params.location_id,
            person_id: params.person_id,
            search: params.search,
        }
    }
}

/// GET /api/assets
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<AssetFilterParams>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Asset>>>, ApiError> {
    let page = state
        .assets
        .list(&filter.into(), &pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/assets
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateAssetRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Asset>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let (new_asset, actor) = req.into_parts();
    let asset = state.assets.create(new_asset, actor).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(asset))))
}

/// GET /api/assets/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AssetDetails>>, ApiError> {
    let details = state.assets.get_details(id).await?;
    Ok(Json(ApiResponse::ok(details)))
}

/// PATCH /api/assets/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAssetRequest>,
) -> Result<Json<ApiResponse<Asset>>, ApiError> {
    let asset = state.assets.patch(id, req.into()).await?;
    Ok(Json(ApiResponse::ok(asset)))
}

/// DELETE /api/assets/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.assets.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/assets/{id}/transition
pub async fn transition(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TransitionActionRequest>,
) -> Result<Json<ApiResponse<CascadeOutcome>>, ApiError> {
    let request: TransitionRequest = req.into();
    let outcome = state.cascade.dispatch(id, &request).await?;
    Ok(Json(ApiResponse::ok(outcome)))
}

/// GET /api/assets/{id}/events
pub async fn events(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<AssetEvent>>>, ApiError> {
    let events = state.assets.events(id).await?;
    Ok(Json(ApiResponse::ok(events)))
}
