//! Relationship graph repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::traits::graph::RelationshipGraph;
use assethub_entity::asset::Asset;
use assethub_entity::relationship::{AssetRelationship, RelationType};

/// PostgreSQL-backed relationship graph.
#[derive(Debug, Clone)]
pub struct RelationshipRepository {
    pool: PgPool,
}

impl RelationshipRepository {
    /// Create a new relationship repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RelationshipGraph for RelationshipRepository {
    async fn peripherals_of(&self, asset_id: Uuid) -> AppResult<Vec<Asset>> {
        sqlx::query_as::<_, Asset>(
            "SELECT a.* FROM assets a \
             JOIN asset_relationships r ON r.child_asset_id = a.id \
             WHERE r.parent_asset_id = $1 \
             ORDER BY a.created_at",
        )
        .bind(asset_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch peripherals", e))
    }

    async fn link(
        &self,
        parent_asset_id: Uuid,
        child_asset_id: Uuid,
        relation_type: RelationType,
    ) -> AppResult<AssetRelationship> {
        if parent_asset_id == child_asset_id {
            return Err(AppError::validation("An asset cannot be its own peripheral"));
        }

        sqlx::query_as::<_, AssetRelationship>(
            "INSERT INTO asset_relationships (parent_asset_id, child_asset_id, relation_type) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (parent_asset_id, child_asset_id, relation_type) \
             DO UPDATE SET relation_type = EXCLUDED.relation_type \
             RETURNING *",
        )
        .bind(parent_asset_id)
        .bind(child_asset_id)
        .bind(relation_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to link assets", e))
    }

    async fn unlink_children(&self, parent_asset_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM asset_relationships WHERE parent_asset_id = $1")
            .bind(parent_asset_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to unlink peripherals", e)
            })?;
        Ok(result.rows_affected())
    }

    async fn list_for_asset(&self, asset_id: Uuid) -> AppResult<Vec<AssetRelationship>> {
        sqlx::query_as::<_, AssetRelationship>(
            "SELECT * FROM asset_relationships \
             WHERE parent_asset_id = $1 OR child_asset_id = $1 \
             ORDER BY created_at",
        )
        .bind(asset_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list relationships", e)
        })
    }
}
