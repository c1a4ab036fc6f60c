//! Asset registry trait.

use async_trait::async_trait;
use uuid::Uuid;

use assethub_entity::asset::{Asset, AssetPatch, AssetStateChange, NewAsset};
use assethub_entity::dashboard::{LabelCount, StatusCount};

use crate::result::AppResult;
use crate::types::filter::AssetFilter;
use crate::types::pagination::{PageRequest, PageResponse};

/// Storage of asset records.
///
/// [`apply_transition`](AssetRegistry::apply_transition) is reserved for
/// the transition engine; everything else is plain CRUD. The engine is
/// the sole writer of `status` and lifecycle-driven `location_id`
/// changes.
#[async_trait]
pub trait AssetRegistry: Send + Sync {
    /// Fetch an asset by id.
    async fn get(&self, id: Uuid) -> AppResult<Option<Asset>>;

    /// Register a new asset.
    async fn insert(&self, asset: NewAsset) -> AppResult<Asset>;

    /// Update descriptive fields. Fails with `NotFound` for unknown ids.
    async fn update_details(&self, id: Uuid, patch: AssetPatch) -> AppResult<Asset>;

    /// Apply a lifecycle state change. Fails with `NotFound` for unknown ids.
    async fn apply_transition(&self, id: Uuid, change: AssetStateChange) -> AppResult<Asset>;

    /// Delete an asset. Returns `false` when the id was unknown.
    async fn remove(&self, id: Uuid) -> AppResult<bool>;

    /// List assets matching the filter, paginated.
    async fn list(&self, filter: &AssetFilter, page: &PageRequest)
    -> AppResult<PageResponse<Asset>>;

    /// Count assets per lifecycle status.
    async fn count_by_status(&self) -> AppResult<Vec<StatusCount>>;

    /// Count assets per asset type name.
    async fn count_by_type(&self) -> AppResult<Vec<LabelCount>>;

    /// Count actively assigned assets per holder department name.
    async fn count_by_department(&self) -> AppResult<Vec<LabelCount>>;
}
