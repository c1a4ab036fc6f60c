//! Asset CRUD orchestration.

pub mod service;

pub use service::{AssetDetails, AssetService};
