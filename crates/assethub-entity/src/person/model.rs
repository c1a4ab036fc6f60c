//! Person entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A person who can hold asset assignments.
///
/// The lifecycle core only reads person identifiers; people are managed
/// by the plain CRUD layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Person {
    /// Unique person identifier.
    pub id: Uuid,
    /// Full display name.
    pub full_name: String,
    /// Login/directory name (unique when present).
    pub username: Option<String>,
    /// Email address (unique when present).
    pub email: Option<String>,
    /// Employing company.
    pub company: Option<String>,
    /// Department (organisation unit) reference.
    pub department_id: Option<Uuid>,
    /// Manager reference.
    pub reports_to_id: Option<Uuid>,
    /// When the person was registered.
    pub created_at: DateTime<Utc>,
    /// When the person was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to register a new person.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPerson {
    /// Full display name.
    pub full_name: String,
    /// Login/directory name.
    pub username: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Employing company.
    pub company: Option<String>,
    /// Department reference.
    pub department_id: Option<Uuid>,
    /// Manager reference.
    pub reports_to_id: Option<Uuid>,
}

/// Updatable person fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonPatch {
    /// New full name.
    pub full_name: Option<String>,
    /// New username.
    pub username: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New company.
    pub company: Option<String>,
    /// New department.
    pub department_id: Option<Uuid>,
    /// New manager.
    pub reports_to_id: Option<Uuid>,
}
