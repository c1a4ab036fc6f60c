//! Asset type and asset model catalog reference data.

pub mod model;

pub use model::{
    AssetModelInfo, AssetModelPatch, AssetType, AssetTypePatch, NewAssetModelInfo, NewAssetType,
};
