//! Asset entity and lifecycle status enumerations.

pub mod model;
pub mod status;

pub use model::{Asset, AssetPatch, AssetStateChange, NewAsset};
pub use status::{AssetStatus, OperationState};
