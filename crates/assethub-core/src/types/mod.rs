//! Shared types used across crates.

pub mod filter;
pub mod pagination;

pub use filter::AssetFilter;
pub use pagination::{PageRequest, PageResponse};
