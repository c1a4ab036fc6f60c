//! Assignment ledger trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use assethub_entity::assignment::{Assignment, NewAssignment};

use crate::result::AppResult;

/// Append/close operations on assignment records.
///
/// The ledger never deletes assignments. The at-most-one-open-assignment
/// invariant is enforced by the transition engine's per-asset lock; the
/// PostgreSQL backend additionally backs it with a partial unique index.
#[async_trait]
pub trait AssignmentLedger: Send + Sync {
    /// Open a new assignment.
    async fn open(&self, assignment: NewAssignment) -> AppResult<Assignment>;

    /// Close the open assignment for an asset, if any.
    ///
    /// Returns `None` when nothing was open; callers treat that as a
    /// no-op, not an error.
    async fn close_open(
        &self,
        asset_id: Uuid,
        end_date: DateTime<Utc>,
    ) -> AppResult<Option<Assignment>>;

    /// Fetch the open assignment for an asset, if any.
    async fn find_open(&self, asset_id: Uuid) -> AppResult<Option<Assignment>>;

    /// List all open assignments held by a person.
    async fn list_open_for_person(&self, person_id: Uuid) -> AppResult<Vec<Assignment>>;

    /// List the full assignment history of an asset, newest first.
    async fn list_for_asset(&self, asset_id: Uuid) -> AppResult<Vec<Assignment>>;

    /// List the full assignment history of a person, newest first.
    async fn list_for_person(&self, person_id: Uuid) -> AppResult<Vec<Assignment>>;
}
