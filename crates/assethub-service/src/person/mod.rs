//! Person CRUD orchestration.

pub mod service;

pub use service::{PersonAssignment, PersonService};
