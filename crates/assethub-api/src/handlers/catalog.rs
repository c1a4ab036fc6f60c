//! Catalog handlers: organisation units, asset types, asset models.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use assethub_core::error::AppError;
use assethub_entity::catalog::{AssetModelInfo, AssetType};
use assethub_entity::org_unit::OrganisationUnit;

use crate::dto::request::{
    CreateAssetModelRequest, CreateAssetTypeRequest, CreateOrgUnitRequest,
    UpdateAssetModelRequest, UpdateAssetTypeRequest, UpdateOrgUnitRequest,
};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/organisation-units
pub async fn list_units(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<OrganisationUnit>>>, ApiError> {
    Ok(Json(ApiResponse::ok(state.catalog.list_units().await?)))
}

/// POST /api/organisation-units
pub async fn create_unit(
    State(state): State<AppState>,
    Json(req): Json<CreateOrgUnitRequest>,
) -> Result<(StatusCode, Json<ApiResponse<OrganisationUnit>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let unit = state.catalog.create_unit(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(unit))))
}

/// PATCH /api/organisation-units/{id}
pub async fn patch_unit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateOrgUnitRequest>,
) -> Result<Json<ApiResponse<OrganisationUnit>>, ApiError> {
    let unit = state.catalog.patch_unit(id, req.into()).await?;
    Ok(Json(ApiResponse::ok(unit)))
}

/// DELETE /api/organisation-units/{id}
pub async fn delete_unit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.catalog.delete_unit(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/asset-types
pub async fn list_types(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<AssetType>>>, ApiError> {
    Ok(Json(ApiResponse::ok(state.catalog.list_types().await?)))
}

/// POST /api/asset-types
pub async fn create_type(
    State(state): State<AppState>,
    Json(req): Json<CreateAssetTypeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AssetType>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let asset_type = state.catalog.create_type(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(asset_type))))
}

/// PATCH /api/asset-types/{id}
pub async fn patch_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAssetTypeRequest>,
) -> Result<Json<ApiResponse<AssetType>>, ApiError> {
    let asset_type = state.catalog.patch_type(id, req.into()).await?;
    Ok(Json(ApiResponse::ok(asset_type)))
}

/// DELETE /api/asset-types/{id}
pub async fn delete_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.catalog.delete_type(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/asset-models
pub async fn list_models(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<AssetModelInfo>>>, ApiError> {
    Ok(Json(ApiResponse::ok(state.catalog.list_models().await?)))
}

/// POST /api/asset-models
pub async fn create_model(
    State(state): State<AppState>,
    Json(req): Json<CreateAssetModelRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AssetModelInfo>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let model = state.catalog.create_model(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(model))))
}

/// PATCH /api/asset-models/{id}
pub async fn patch_model(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAssetModelRequest>,
) -> Result<Json<ApiResponse<AssetModelInfo>>, ApiError> {
    let model = state.catalog.patch_model(id, req.into()).await?;
    Ok(Json(ApiResponse::ok(model)))
}

/// DELETE /api/asset-models/{id}
pub async fn delete_model(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.catalog.delete_model(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
