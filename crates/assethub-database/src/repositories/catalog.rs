//! Catalog store repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::traits::catalog::CatalogStore;
use assethub_entity::catalog::{
    AssetModelInfo, AssetModelPatch, AssetType, AssetTypePatch, NewAssetModelInfo, NewAssetType,
};

/// PostgreSQL-backed catalog of asset types and models.
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    /// Create a new catalog repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for CatalogRepository {
    async fn get_type(&self, id: Uuid) -> AppResult<Option<AssetType>> {
        sqlx::query_as::<_, AssetType>("SELECT * FROM asset_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to fetch asset type", e)
            })
    }

    async fn insert_type(&self, asset_type: NewAssetType) -> AppResult<AssetType> {
        sqlx::query_as::<_, AssetType>(
            "INSERT INTO asset_types (name, category, description) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&asset_type.name)
        .bind(&asset_type.category)
        .bind(&asset_type.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::conflict("An asset type with this name already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to insert asset type", e),
        })
    }

    async fn update_type(&self, id: Uuid, patch: AssetTypePatch) -> AppResult<AssetType> {
        sqlx::query_as::<_, AssetType>(
            "UPDATE asset_types SET \
             name = COALESCE($2, name), \
             category = COALESCE($3, category), \
             description = COALESCE($4, description) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.category)
        .bind(&patch.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update asset type", e))?
        .ok_or_else(|| AppError::not_found(format!("Asset type {id} not found")))
    }

    async fn remove_type(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM asset_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete asset type", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_types(&self) -> AppResult<Vec<AssetType>> {
        sqlx::query_as::<_, AssetType>("SELECT * FROM asset_types ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list asset types", e)
            })
    }

    async fn get_model(&self, id: Uuid) -> AppResult<Option<AssetModelInfo>> {
        sqlx::query_as::<_, AssetModelInfo>("SELECT * FROM asset_models WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to fetch asset model", e)
            })
    }

    async fn model_exists(&self, id: Uuid) -> AppResult<bool> {
        let found: Option<i32> = sqlx::query_scalar("SELECT 1 FROM asset_models WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to check asset model existence",
                    e,
                )
            })?;
        Ok(found.is_some())
    }

    async fn insert_model(&self, model: NewAssetModelInfo) -> AppResult<AssetModelInfo> {
        sqlx::query_as::<_, AssetModelInfo>(
            "INSERT INTO asset_models (manufacturer, model_number, asset_type_id, \
             default_description) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&model.manufacturer)
        .bind(&model.model_number)
        .bind(model.asset_type_id)
        .bind(&model.default_description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::conflict("An asset model with this manufacturer and number already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to insert asset model", e),
        })
    }

    async fn update_model(&self, id: Uuid, patch: AssetModelPatch) -> AppResult<AssetModelInfo> {
        sqlx::query_as::<_, AssetModelInfo>(
            "UPDATE asset_models SET \
             manufacturer = COALESCE($2, manufacturer), \
             model_number = COALESCE($3, model_number), \
             asset_type_id = COALESCE($4, asset_type_id), \
             default_description = COALESCE($5, default_description) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&patch.manufacturer)
        .bind(&patch.model_number)
        .bind(patch.asset_type_id)
        .bind(&patch.default_description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update asset model", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Asset model {id} not found")))
    }

    async fn remove_model(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM asset_models WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete asset model", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_models(&self) -> AppResult<Vec<AssetModelInfo>> {
        sqlx::query_as::<_, AssetModelInfo>(
            "SELECT * FROM asset_models ORDER BY manufacturer, model_number",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list asset models", e))
    }
}
