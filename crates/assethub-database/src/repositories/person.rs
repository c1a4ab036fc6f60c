//! Person directory repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::traits::directory::PersonDirectory;
use assethub_core::types::pagination::{PageRequest, PageResponse};
use assethub_entity::person::{NewPerson, Person, PersonPatch};

/// PostgreSQL-backed person directory.
#[derive(Debug, Clone)]
pub struct PersonRepository {
    pool: PgPool,
}

impl PersonRepository {
    /// Create a new person repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonDirectory for PersonRepository {
    async fn get(&self, id: Uuid) -> AppResult<Option<Person>> {
        sqlx::query_as::<_, Person>("SELECT * FROM people WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch person", e))
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let found: Option<i32> = sqlx::query_scalar("SELECT 1 FROM people WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check person existence", e)
            })?;
        Ok(found.is_some())
    }

    async fn insert(&self, person: NewPerson) -> AppResult<Person> {
        sqlx::query_as::<_, Person>(
            "INSERT INTO people (full_name, username, email, company, department_id, \
             reports_to_id) VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&person.full_name)
        .bind(&person.username)
        .bind(&person.email)
        .bind(&person.company)
        .bind(person.department_id)
        .bind(person.reports_to_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::conflict("A person with this username or email already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to insert person", e),
        })
    }

    async fn update(&self, id: Uuid, patch: PersonPatch) -> AppResult<Person> {
        sqlx::query_as::<_, Person>(
            "UPDATE people SET \
             full_name = COALESCE($2, full_name), \
             username = COALESCE($3, username), \
             email = COALESCE($4, email), \
             company = COALESCE($5, company), \
             department_id = COALESCE($6, department_id), \
             reports_to_id = COALESCE($7, reports_to_id), \
             updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&patch.full_name)
        .bind(&patch.username)
        .bind(&patch.email)
        .bind(&patch.company)
        .bind(patch.department_id)
        .bind(patch.reports_to_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update person", e))?
        .ok_or_else(|| AppError::not_found(format!("Person {id} not found")))
    }

    async fn remove(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete person", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(
        &self,
        search: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Person>> {
        let (count_sql, select_sql) = if search.is_some() {
            (
                "SELECT COUNT(*) FROM people WHERE full_name ILIKE $1 OR username ILIKE $1",
                "SELECT * FROM people WHERE full_name ILIKE $1 OR username ILIKE $1 \
                 ORDER BY full_name LIMIT $2 OFFSET $3",
            )
        } else {
            (
                "SELECT COUNT(*) FROM people",
                "SELECT * FROM people ORDER BY full_name LIMIT $1 OFFSET $2",
            )
        };

        let mut count_query = sqlx::query_scalar::<_, i64>(count_sql);
        let mut select_query = sqlx::query_as::<_, Person>(select_sql);

        if let Some(search) = search {
            let pattern = format!("%{search}%");
            count_query = count_query.bind(pattern.clone());
            select_query = select_query.bind(pattern);
        }

        let total = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count people", e))?;

        let people = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list people", e))?;

        Ok(PageResponse::new(
            people,
            page.page,
            page.page_size,
            total as u64,
        ))
    }
}
