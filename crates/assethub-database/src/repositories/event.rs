//! Audit trail repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::traits::audit::AuditTrail;
use assethub_entity::event::{AssetEvent, NewAssetEvent};

/// PostgreSQL-backed append-only audit trail.
///
/// There is deliberately no update or delete here; events are write-once.
#[derive(Debug, Clone)]
pub struct AssetEventRepository {
    pool: PgPool,
}

impl AssetEventRepository {
    /// Create a new asset event repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditTrail for AssetEventRepository {
    async fn append(&self, event: NewAssetEvent) -> AppResult<AssetEvent> {
        sqlx::query_as::<_, AssetEvent>(
            "INSERT INTO asset_events (asset_id, action, actor, from_status, to_status, \
             from_location_id, to_location_id, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(event.asset_id)
        .bind(event.action)
        .bind(&event.actor)
        .bind(event.from_status)
        .bind(event.to_status)
        .bind(event.from_location_id)
        .bind(event.to_location_id)
        .bind(&event.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to append asset event", e))
    }

    async fn list_for_asset(&self, asset_id: Uuid) -> AppResult<Vec<AssetEvent>> {
        sqlx::query_as::<_, AssetEvent>(
            "SELECT * FROM asset_events WHERE asset_id = $1 \
             ORDER BY created_at DESC, seq DESC",
        )
        .bind(asset_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list asset events", e))
    }
}
