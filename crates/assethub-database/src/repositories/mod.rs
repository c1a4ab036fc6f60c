//! PostgreSQL implementations of the AssetHub registry traits.

pub mod asset;
pub mod assignment;
pub mod catalog;
pub mod event;
pub mod org_unit;
pub mod person;
pub mod relationship;

pub use asset::AssetRepository;
pub use assignment::AssignmentRepository;
pub use catalog::CatalogRepository;
pub use event::AssetEventRepository;
pub use org_unit::OrgUnitRepository;
pub use person::PersonRepository;
pub use relationship::RelationshipRepository;
