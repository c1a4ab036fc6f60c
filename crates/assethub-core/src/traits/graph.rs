//! Relationship graph trait.

use async_trait::async_trait;
use uuid::Uuid;

use assethub_entity::asset::Asset;
use assethub_entity::relationship::{AssetRelationship, RelationType};

use crate::result::AppResult;

/// Resolves peripheral edges between assets.
///
/// Discovery is single-hop by design: peripherals of a peripheral are
/// not followed.
#[async_trait]
pub trait RelationshipGraph: Send + Sync {
    /// All assets reachable by one `attached_to`/`peripheral_of` edge
    /// from the given parent.
    async fn peripherals_of(&self, asset_id: Uuid) -> AppResult<Vec<Asset>>;

    /// Record a parent→child edge. Idempotent: an existing identical
    /// edge is returned unchanged.
    async fn link(
        &self,
        parent_asset_id: Uuid,
        child_asset_id: Uuid,
        relation_type: RelationType,
    ) -> AppResult<AssetRelationship>;

    /// Remove all outgoing edges of a parent. Returns how many were removed.
    async fn unlink_children(&self, parent_asset_id: Uuid) -> AppResult<u64>;

    /// List all edges touching an asset, either side.
    async fn list_for_asset(&self, asset_id: Uuid) -> AppResult<Vec<AssetRelationship>>;
}
