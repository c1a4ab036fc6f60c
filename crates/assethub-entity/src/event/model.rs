//! Asset audit event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::asset::status::AssetStatus;

use super::action::EventAction;

/// One immutable entry in an asset's audit trail.
///
/// Events are append-only and totally ordered by `(created_at, seq)`.
/// Every successful transition produces exactly one event per affected
/// asset, cascaded peripherals included.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssetEvent {
    /// Unique event identifier.
    pub id: Uuid,
    /// The asset the event belongs to.
    pub asset_id: Uuid,
    /// What happened.
    pub action: EventAction,
    /// Free-form identity of whoever triggered the action.
    pub actor: Option<String>,
    /// Status before the change. `None` when the event is not a status change.
    pub from_status: Option<AssetStatus>,
    /// Status after the change. `None` when the event is not a status change.
    pub to_status: Option<AssetStatus>,
    /// Location before the change.
    pub from_location_id: Option<Uuid>,
    /// Location after the change.
    pub to_location_id: Option<Uuid>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Insertion sequence, breaks ties between equal timestamps.
    pub seq: i64,
    /// When the event was recorded.
    pub created_at: DateTime<Utc>,
}

/// Data required to append a new audit event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAssetEvent {
    /// The asset the event belongs to.
    pub asset_id: Uuid,
    /// What happened.
    pub action: EventAction,
    /// Who triggered the action.
    pub actor: Option<String>,
    /// Status before the change.
    pub from_status: Option<AssetStatus>,
    /// Status after the change.
    pub to_status: Option<AssetStatus>,
    /// Location before the change.
    pub from_location_id: Option<Uuid>,
    /// Location after the change.
    pub to_location_id: Option<Uuid>,
    /// Notes.
    pub notes: Option<String>,
}
