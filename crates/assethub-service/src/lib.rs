//! # assethub-service
//!
//! Business logic service layer for AssetHub. The lifecycle module holds
//! the transition engine, the peripheral cascade, and the offboarding
//! orchestrator; the remaining modules are plain CRUD orchestration over
//! the registry traits.
//!
//! Services follow constructor injection — all collaborators are provided
//! at construction time as `Arc<dyn Trait>` references, so the same
//! services run against PostgreSQL in production and the in-memory
//! inventory in tests.

pub mod asset;
pub mod catalog;
pub mod dashboard;
pub mod lifecycle;
pub mod person;

pub use asset::AssetService;
pub use catalog::CatalogService;
pub use dashboard::DashboardService;
pub use lifecycle::{
    AssetLocks, CascadeOutcome, CascadeRunner, OffboardingService, PeripheralOutcome,
    TransitionEngine, TransitionRequest,
};
pub use person::PersonService;
