//! Route definitions for the AssetHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via axum's
//! `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, patch, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(asset_routes())
        .merge(person_routes())
        .merge(catalog_routes())
        .merge(dashboard_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Asset endpoints: CRUD, lifecycle transitions, audit trail.
fn asset_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/assets",
            get(handlers::asset::list).post(handlers::asset::create),
        )
        .route(
            "/assets/{id}",
            get(handlers::asset::get)
                .patch(handlers::asset::patch)
                .delete(handlers::asset::delete),
        )
        .route("/assets/{id}/transition", post(handlers::asset::transition))
        .route("/assets/{id}/events", get(handlers::asset::events))
}

/// People endpoints: CRUD, assignment history, offboarding.
fn person_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/people",
            get(handlers::person::list).post(handlers::person::create),
        )
        .route(
            "/people/{id}",
            get(handlers::person::get)
                .patch(handlers::person::patch)
                .delete(handlers::person::delete),
        )
        .route(
            "/people/{id}/assignments",
            get(handlers::person::assignments),
        )
        .route("/people/{id}/offboard", post(handlers::person::offboard))
}

/// Reference data endpoints: units, types, models.
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/organisation-units",
            get(handlers::catalog::list_units).post(handlers::catalog::create_unit),
        )
        .route(
            "/organisation-units/{id}",
            patch(handlers::catalog::patch_unit).delete(handlers::catalog::delete_unit),
        )
        .route(
            "/asset-types",
            get(handlers::catalog::list_types).post(handlers::catalog::create_type),
        )
        .route(
            "/asset-types/{id}",
            patch(handlers::catalog::patch_type).delete(handlers::catalog::delete_type),
        )
        .route(
            "/asset-models",
            get(handlers::catalog::list_models).post(handlers::catalog::create_model),
        )
        .route(
            "/asset-models/{id}",
            patch(handlers::catalog::patch_model).delete(handlers::catalog::delete_model),
        )
}

/// Dashboard endpoints.
fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard/summary", get(handlers::dashboard::summary))
}

/// Health endpoints.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
