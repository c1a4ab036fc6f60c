//! Audit trail trait.

use async_trait::async_trait;
use uuid::Uuid;

use assethub_entity::event::{AssetEvent, NewAssetEvent};

use crate::result::AppResult;

/// Append-only sink for asset audit events.
///
/// Events are never edited or removed. Append propagates storage errors
/// upward; it never fails silently.
#[async_trait]
pub trait AuditTrail: Send + Sync {
    /// Append one event and return it with its assigned sequence.
    async fn append(&self, event: NewAssetEvent) -> AppResult<AssetEvent>;

    /// List all events of an asset, newest first.
    async fn list_for_asset(&self, asset_id: Uuid) -> AppResult<Vec<AssetEvent>>;
}
