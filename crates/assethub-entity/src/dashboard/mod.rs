//! Dashboard aggregation row types.

pub mod model;

pub use model::{LabelCount, StatusCount};
