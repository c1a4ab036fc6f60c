//! Organisation unit directory repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::traits::directory::OrgUnitDirectory;
use assethub_entity::org_unit::{NewOrganisationUnit, OrgUnitPatch, OrganisationUnit};

/// PostgreSQL-backed organisation unit directory.
#[derive(Debug, Clone)]
pub struct OrgUnitRepository {
    pool: PgPool,
}

impl OrgUnitRepository {
    /// Create a new organisation unit repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrgUnitDirectory for OrgUnitRepository {
    async fn get(&self, id: Uuid) -> AppResult<Option<OrganisationUnit>> {
        sqlx::query_as::<_, OrganisationUnit>("SELECT * FROM organisation_units WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to fetch organisation unit", e)
            })
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let found: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM organisation_units WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Database,
                        "Failed to check organisation unit existence",
                        e,
                    )
                })?;
        Ok(found.is_some())
    }

    async fn insert(&self, unit: NewOrganisationUnit) -> AppResult<OrganisationUnit> {
        sqlx::query_as::<_, OrganisationUnit>(
            "INSERT INTO organisation_units (name, category, description) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&unit.name)
        .bind(unit.category)
        .bind(&unit.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert organisation unit", e)
        })
    }

    async fn update(&self, id: Uuid, patch: OrgUnitPatch) -> AppResult<OrganisationUnit> {
        sqlx::query_as::<_, OrganisationUnit>(
            "UPDATE organisation_units SET \
             name = COALESCE($2, name), \
             category = COALESCE($3, category), \
             description = COALESCE($4, description) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&patch.name)
        .bind(patch.category)
        .bind(&patch.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update organisation unit", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Organisation unit {id} not found")))
    }

    async fn remove(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM organisation_units WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete organisation unit", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> AppResult<Vec<OrganisationUnit>> {
        sqlx::query_as::<_, OrganisationUnit>("SELECT * FROM organisation_units ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list organisation units", e)
            })
    }
}
