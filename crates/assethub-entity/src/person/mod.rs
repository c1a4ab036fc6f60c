//! Person reference data.

pub mod model;

pub use model::{NewPerson, Person, PersonPatch};
