//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use assethub_core::config::AppConfig;
use assethub_core::traits::{
    AssetRegistry, AssignmentLedger, AuditTrail, CatalogStore, OrgUnitDirectory, PersonDirectory,
    RelationshipGraph,
};
use assethub_database::MemoryInventory;
use assethub_database::repositories::{
    AssetEventRepository, AssetRepository, AssignmentRepository, CatalogRepository,
    OrgUnitRepository, PersonRepository, RelationshipRepository,
};
use assethub_service::lifecycle::{CascadeRunner, OffboardingService, TransitionEngine};
use assethub_service::{AssetService, CatalogService, DashboardService, PersonService};

/// The registry backends the services run against.
///
/// One bundle per storage backend: PostgreSQL repositories in
/// production, the in-memory inventory in tests.
#[derive(Clone)]
pub struct Registries {
    /// Asset storage.
    pub assets: Arc<dyn AssetRegistry>,
    /// Assignment ledger.
    pub ledger: Arc<dyn AssignmentLedger>,
    /// Relationship graph.
    pub graph: Arc<dyn RelationshipGraph>,
    /// Audit trail.
    pub audit: Arc<dyn AuditTrail>,
    /// Person directory.
    pub people: Arc<dyn PersonDirectory>,
    /// Organisation unit directory.
    pub org_units: Arc<dyn OrgUnitDirectory>,
    /// Catalog store.
    pub catalog: Arc<dyn CatalogStore>,
}

impl Registries {
    /// Bundle the PostgreSQL repositories over one pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            assets: Arc::new(AssetRepository::new(pool.clone())),
            ledger: Arc::new(AssignmentRepository::new(pool.clone())),
            graph: Arc::new(RelationshipRepository::new(pool.clone())),
            audit: Arc::new(AssetEventRepository::new(pool.clone())),
            people: Arc::new(PersonRepository::new(pool.clone())),
            org_units: Arc::new(OrgUnitRepository::new(pool.clone())),
            catalog: Arc::new(CatalogRepository::new(pool)),
        }
    }

    /// Bundle one in-memory inventory as every backend.
    pub fn memory(store: Arc<MemoryInventory>) -> Self {
        Self {
            assets: store.clone(),
            ledger: store.clone(),
            graph: store.clone(),
            audit: store.clone(),
            people: store.clone(),
            org_units: store.clone(),
            catalog: store,
        }
    }
}

/// Application state containing all shared dependencies.
///
/// Passed to every axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Asset CRUD service.
    pub assets: Arc<AssetService>,
    /// Person CRUD service.
    pub people: Arc<PersonService>,
    /// Catalog reference data service.
    pub catalog: Arc<CatalogService>,
    /// Dashboard aggregation service.
    pub dashboard: Arc<DashboardService>,
    /// Cascade runner (the transition entry point).
    pub cascade: Arc<CascadeRunner>,
    /// Offboarding orchestrator.
    pub offboarding: Arc<OffboardingService>,
}

impl AppState {
    /// Wire the full service graph over one set of registries.
    pub fn build(config: AppConfig, registries: Registries) -> Self {
        let engine = Arc::new(TransitionEngine::new(
            registries.assets.clone(),
            registries.ledger.clone(),
            registries.people.clone(),
            registries.org_units.clone(),
            registries.audit.clone(),
        ));
        let cascade = Arc::new(CascadeRunner::new(engine, registries.graph.clone()));
        let offboarding = Arc::new(OffboardingService::new(
            cascade.clone(),
            registries.ledger.clone(),
            registries.people.clone(),
        ));

        Self {
            config: Arc::new(config),
            assets: Arc::new(AssetService::new(
                registries.assets.clone(),
                registries.ledger.clone(),
                registries.graph.clone(),
                registries.audit.clone(),
                registries.catalog.clone(),
                registries.org_units.clone(),
            )),
            people: Arc::new(PersonService::new(
                registries.people.clone(),
                registries.ledger.clone(),
                registries.assets.clone(),
                registries.org_units.clone(),
            )),
            catalog: Arc::new(CatalogService::new(
                registries.catalog,
                registries.org_units,
            )),
            dashboard: Arc::new(DashboardService::new(registries.assets)),
            cascade,
            offboarding,
        }
    }
}
