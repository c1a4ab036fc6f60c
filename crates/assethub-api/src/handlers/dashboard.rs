//! Dashboard handlers.

use axum::Json;
use axum::extract::State;

use assethub_service::dashboard::DashboardSummary;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/dashboard/summary
pub async fn summary(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardSummary>>, ApiError> {
    let summary = state.dashboard.summary().await?;
    Ok(Json(ApiResponse::ok(summary)))
}
