//! Catalog and organisation unit reference data.

pub mod service;

pub use service::CatalogService;
