//! # assethub-database
//!
//! PostgreSQL connection management and concrete implementations of the
//! AssetHub registry traits, plus a single-process in-memory backend
//! used by the service and API test suites.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;

pub use connection::connect_pool;
pub use memory::MemoryInventory;
