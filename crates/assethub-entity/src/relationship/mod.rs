//! Asset-to-asset relationship edges used for peripheral discovery.

pub mod model;

pub use model::{AssetRelationship, RelationType};
