//! Catalog store trait for asset types and asset models.

use async_trait::async_trait;
use uuid::Uuid;

use assethub_entity::catalog::{
    AssetModelInfo, AssetModelPatch, AssetType, AssetTypePatch, NewAssetModelInfo, NewAssetType,
};

use crate::result::AppResult;

/// Storage of catalog reference data.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Fetch an asset type by id.
    async fn get_type(&self, id: Uuid) -> AppResult<Option<AssetType>>;

    /// Register a new asset type.
    async fn insert_type(&self, asset_type: NewAssetType) -> AppResult<AssetType>;

    /// Update asset type fields. Fails with `NotFound` for unknown ids.
    async fn update_type(&self, id: Uuid, patch: AssetTypePatch) -> AppResult<AssetType>;

    /// Delete an asset type. Returns `false` when the id was unknown.
    async fn remove_type(&self, id: Uuid) -> AppResult<bool>;

    /// List all asset types, name-ordered.
    async fn list_types(&self) -> AppResult<Vec<AssetType>>;

    /// Fetch an asset model by id.
    async fn get_model(&self, id: Uuid) -> AppResult<Option<AssetModelInfo>>;

    /// Whether an asset model with this id exists.
    async fn model_exists(&self, id: Uuid) -> AppResult<bool>;

    /// Register a new asset model.
    async fn insert_model(&self, model: NewAssetModelInfo) -> AppResult<AssetModelInfo>;

    /// Update asset model fields. Fails with `NotFound` for unknown ids.
    async fn update_model(&self, id: Uuid, patch: AssetModelPatch) -> AppResult<AssetModelInfo>;

    /// Delete an asset model. Returns `false` when the id was unknown.
    async fn remove_model(&self, id: Uuid) -> AppResult<bool>;

    /// List all asset models, manufacturer-ordered.
    async fn list_models(&self) -> AppResult<Vec<AssetModelInfo>>;
}
