//! Asset registry repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::traits::registry::AssetRegistry;
use assethub_core::types::filter::AssetFilter;
use assethub_core::types::pagination::{PageRequest, PageResponse};
use assethub_entity::asset::{Asset, AssetPatch, AssetStateChange, NewAsset};
use assethub_entity::dashboard::{LabelCount, StatusCount};

/// PostgreSQL-backed asset registry.
#[derive(Debug, Clone)]
pub struct AssetRepository {
    pool: PgPool,
}

impl AssetRepository {
    /// Create a new asset repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssetRegistry for AssetRepository {
    async fn get(&self, id: Uuid) -> AppResult<Option<Asset>> {
        sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch asset", e))
    }

    async fn insert(&self, asset: NewAsset) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>(
            "INSERT INTO assets (asset_tag, serial_number, asset_model_id, status, \
             operation_state, purchase_date, supplier, description, notes, location_id) \
             VALUES ($1, $2, $3, COALESCE($4, 'spare'), COALESCE($5, 'normal'), \
             $6, $7, $8, $9, $10) RETURNING *",
        )
        .bind(&asset.asset_tag)
        .bind(&asset.serial_number)
        .bind(asset.asset_model_id)
        .bind(asset.status)
        .bind(asset.operation_state)
        .bind(asset.purchase_date)
        .bind(&asset.supplier)
        .bind(&asset.description)
        .bind(&asset.notes)
        .bind(asset.location_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::conflict("An asset with this tag or serial number already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to insert asset", e),
        })
    }

    async fn update_details(&self, id: Uuid, patch: AssetPatch) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>(
            "UPDATE assets SET \
             asset_tag = COALESCE($2, asset_tag), \
             serial_number = COALESCE($3, serial_number), \
             purchase_date = COALESCE($4, purchase_date), \
             supplier = COALESCE($5, supplier), \
             description = COALESCE($6, description), \
             notes = COALESCE($7, notes), \
             operation_state = COALESCE($8, operation_state), \
             updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&patch.asset_tag)
        .bind(&patch.serial_number)
        .bind(patch.purchase_date)
        .bind(&patch.supplier)
        .bind(&patch.description)
        .bind(&patch.notes)
        .bind(patch.operation_state)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update asset", e))?
        .ok_or_else(|| AppError::not_found(format!("Asset {id} not found")))
    }

    async fn apply_transition(&self, id: Uuid, change: AssetStateChange) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>(
            "UPDATE assets SET \
             status = COALESCE($2, status), \
             location_id = COALESCE($3, location_id), \
             operation_state = COALESCE($4, operation_state), \
             updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(change.status)
        .bind(change.location_id)
        .bind(change.operation_state)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to apply asset transition", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Asset {id} not found")))
    }

    async fn remove(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete asset", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(
        &self,
        filter: &AssetFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Asset>> {
        let mut conditions = Vec::new();
        let mut param_idx = 1u32;

        if filter.status.is_some() {
            conditions.push(format!("status = ${param_idx}"));
            param_idx += 1;
        }
        if filter.asset_type_id.is_some() {
            conditions.push(format!(
                "asset_model_id IN (SELECT id FROM asset_models WHERE asset_type_id = ${param_idx})"
            ));
            param_idx += 1;
        }
        if filter.location_id.is_some() {
            conditions.push(format!("location_id = ${param_idx}"));
            param_idx += 1;
        }
        if filter.person_id.is_some() {
            conditions.push(format!(
                "EXISTS (SELECT 1 FROM assignments a WHERE a.asset_id = assets.id \
                 AND a.person_id = ${param_idx} AND a.end_date IS NULL)"
            ));
            param_idx += 1;
        }
        if filter.search.is_some() {
            conditions.push(format!(
                "(asset_tag ILIKE ${param_idx} OR serial_number ILIKE ${param_idx} \
                 OR description ILIKE ${param_idx})"
            ));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM assets {where_clause}");
        let select_sql = format!(
            "SELECT * FROM assets {where_clause} ORDER BY created_at DESC \
             LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        let mut select_query = sqlx::query_as::<_, Asset>(&select_sql);

        if let Some(status) = filter.status {
            count_query = count_query.bind(status);
            select_query = select_query.bind(status);
        }
        if let Some(type_id) = filter.asset_type_id {
            count_query = count_query.bind(type_id);
            select_query = select_query.bind(type_id);
        }
        if let Some(location_id) = filter.location_id {
            count_query = count_query.bind(location_id);
            select_query = select_query.bind(location_id);
        }
        if let Some(person_id) = filter.person_id {
            count_query = count_query.bind(person_id);
            select_query = select_query.bind(person_id);
        }
        if let Some(search) = &filter.search {
            let pattern = format!("%{search}%");
            count_query = count_query.bind(pattern.clone());
            select_query = select_query.bind(pattern);
        }

        let total = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count assets", e))?;

        let assets = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list assets", e))?;

        Ok(PageResponse::new(
            assets,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    async fn count_by_status(&self) -> AppResult<Vec<StatusCount>> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count FROM assets GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count assets by status", e)
        })
    }

    async fn count_by_type(&self) -> AppResult<Vec<LabelCount>> {
        sqlx::query_as::<_, LabelCount>(
            "SELECT t.name AS label, COUNT(*) AS count FROM assets a \
             JOIN asset_models m ON a.asset_model_id = m.id \
             JOIN asset_types t ON m.asset_type_id = t.id \
             GROUP BY t.name ORDER BY count DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count assets by type", e)
        })
    }

    async fn count_by_department(&self) -> AppResult<Vec<LabelCount>> {
        sqlx::query_as::<_, LabelCount>(
            "SELECT u.name AS label, COUNT(*) AS count FROM assignments s \
             JOIN people p ON s.person_id = p.id \
             JOIN organisation_units u ON p.department_id = u.id \
             WHERE s.end_date IS NULL \
             GROUP BY u.name ORDER BY count DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to count assets by department",
                e,
            )
        })
    }
}
