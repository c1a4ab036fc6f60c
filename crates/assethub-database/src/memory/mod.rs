//! Single-process in-memory backend.
//!
//! Implements every registry trait over one lock-guarded store. Used by
//! the service and API test suites; not suitable for multi-node
//! deployments.

pub mod store;

pub use store::MemoryInventory;
