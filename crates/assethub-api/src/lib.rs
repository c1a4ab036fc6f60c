//! # assethub-api
//!
//! HTTP API layer for AssetHub: axum routes, handlers, DTOs, and
//! middleware over the service layer.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::{AppState, Registries};
