//! Assignment entity: a time-bounded binding of an asset to a person.

pub mod model;

pub use model::{Assignment, NewAssignment};
