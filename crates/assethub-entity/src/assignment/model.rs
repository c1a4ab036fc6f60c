//! Assignment entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A time-bounded binding of an asset to a person.
///
/// An assignment is open while `end_date` is `NULL`. Assignments are
/// closed by the transition engine, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Assignment {
    /// Unique assignment identifier.
    pub id: Uuid,
    /// The assigned asset.
    pub asset_id: Uuid,
    /// The person the asset is assigned to.
    pub person_id: Uuid,
    /// When the assignment started.
    pub start_date: DateTime<Utc>,
    /// When the assignment ended. Open iff `None`.
    pub end_date: Option<DateTime<Utc>>,
    /// When the asset is expected back.
    pub expected_return_date: Option<NaiveDate>,
    /// Whether this asset is the person's primary device.
    pub primary_device: bool,
    /// Free-form notes.
    pub notes: Option<String>,
}

impl Assignment {
    /// Whether the assignment is currently open.
    pub fn is_open(&self) -> bool {
        self.end_date.is_none()
    }
}

/// Data required to open a new assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAssignment {
    /// The asset being assigned.
    pub asset_id: Uuid,
    /// The receiving person.
    pub person_id: Uuid,
    /// Expected return date.
    pub expected_return_date: Option<NaiveDate>,
    /// Whether the asset is the person's primary device.
    pub primary_device: bool,
    /// Notes.
    pub notes: Option<String>,
}
