//! Registry traits the lifecycle core runs against.
//!
//! Each trait is the contract with one external collaborator: asset
//! storage, the assignment ledger, the relationship graph, the audit
//! trail, and the reference-data directories. Two backends implement
//! every trait: the PostgreSQL repositories and the in-memory inventory
//! used by the test suites.

pub mod audit;
pub mod catalog;
pub mod directory;
pub mod graph;
pub mod ledger;
pub mod registry;

pub use audit::AuditTrail;
pub use catalog::CatalogStore;
pub use directory::{OrgUnitDirectory, PersonDirectory};
pub use graph::RelationshipGraph;
pub use ledger::AssignmentLedger;
pub use registry::AssetRegistry;
