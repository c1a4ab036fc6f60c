//! Assignment ledger repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::traits::ledger::AssignmentLedger;
use assethub_entity::assignment::{Assignment, NewAssignment};

/// PostgreSQL-backed assignment ledger.
#[derive(Debug, Clone)]
pub struct AssignmentRepository {
    pool: PgPool,
}

impl AssignmentRepository {
    /// Create a new assignment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentLedger for AssignmentRepository {
    async fn open(&self, assignment: NewAssignment) -> AppResult<Assignment> {
        sqlx::query_as::<_, Assignment>(
            "INSERT INTO assignments (asset_id, person_id, expected_return_date, \
             primary_device, notes) VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(assignment.asset_id)
        .bind(assignment.person_id)
        .bind(assignment.expected_return_date)
        .bind(assignment.primary_device)
        .bind(&assignment.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // Partial unique index on (asset_id) WHERE end_date IS NULL.
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::conflict("Asset already has an open assignment")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to open assignment", e),
        })
    }

    async fn close_open(
        &self,
        asset_id: Uuid,
        end_date: DateTime<Utc>,
    ) -> AppResult<Option<Assignment>> {
        sqlx::query_as::<_, Assignment>(
            "UPDATE assignments SET end_date = $2 \
             WHERE asset_id = $1 AND end_date IS NULL RETURNING *",
        )
        .bind(asset_id)
        .bind(end_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to close assignment", e))
    }

    async fn find_open(&self, asset_id: Uuid) -> AppResult<Option<Assignment>> {
        sqlx::query_as::<_, Assignment>(
            "SELECT * FROM assignments WHERE asset_id = $1 AND end_date IS NULL",
        )
        .bind(asset_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to fetch open assignment", e)
        })
    }

    async fn list_open_for_person(&self, person_id: Uuid) -> AppResult<Vec<Assignment>> {
        sqlx::query_as::<_, Assignment>(
            "SELECT * FROM assignments WHERE person_id = $1 AND end_date IS NULL \
             ORDER BY start_date DESC",
        )
        .bind(person_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list open assignments", e)
        })
    }

    async fn list_for_asset(&self, asset_id: Uuid) -> AppResult<Vec<Assignment>> {
        sqlx::query_as::<_, Assignment>(
            "SELECT * FROM assignments WHERE asset_id = $1 ORDER BY start_date DESC",
        )
        .bind(asset_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list asset assignments", e)
        })
    }

    async fn list_for_person(&self, person_id: Uuid) -> AppResult<Vec<Assignment>> {
        sqlx::query_as::<_, Assignment>(
            "SELECT * FROM assignments WHERE person_id = $1 ORDER BY start_date DESC",
        )
        .bind(person_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list person assignments", e)
        })
    }
}
