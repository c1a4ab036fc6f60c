//! Asset entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::{AssetStatus, OperationState};

/// A tracked physical IT asset.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Asset {
    /// Unique asset identifier.
    pub id: Uuid,
    /// Human-assigned inventory tag (unique when present).
    pub asset_tag: Option<String>,
    /// Manufacturer serial number (unique when present).
    pub serial_number: Option<String>,
    /// The catalog model this asset is an instance of.
    pub asset_model_id: Uuid,
    /// Lifecycle status.
    pub status: AssetStatus,
    /// Operational health, independent of lifecycle status.
    pub operation_state: OperationState,
    /// Date of purchase.
    pub purchase_date: Option<NaiveDate>,
    /// Supplier the asset was purchased from.
    pub supplier: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Current location (organisation unit).
    pub location_id: Option<Uuid>,
    /// When the asset was registered.
    pub created_at: DateTime<Utc>,
    /// When the asset was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Asset {
    /// Whether the asset can still be transitioned.
    pub fn is_retired(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Data required to register a new asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAsset {
    /// Inventory tag.
    pub asset_tag: Option<String>,
    /// Serial number.
    pub serial_number: Option<String>,
    /// Catalog model reference.
    pub asset_model_id: Uuid,
    /// Initial lifecycle status (defaults to `spare`).
    pub status: Option<AssetStatus>,
    /// Initial operational state (defaults to `normal`).
    pub operation_state: Option<OperationState>,
    /// Date of purchase.
    pub purchase_date: Option<NaiveDate>,
    /// Supplier name.
    pub supplier: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Notes.
    pub notes: Option<String>,
    /// Initial location.
    pub location_id: Option<Uuid>,
}

/// Descriptive fields that may be updated outside the lifecycle engine.
///
/// Lifecycle status, location, and assignments are deliberately absent:
/// those are written only by the transition engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetPatch {
    /// New inventory tag.
    pub asset_tag: Option<String>,
    /// New serial number.
    pub serial_number: Option<String>,
    /// New purchase date.
    pub purchase_date: Option<NaiveDate>,
    /// New supplier.
    pub supplier: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New notes.
    pub notes: Option<String>,
    /// New operational state.
    pub operation_state: Option<OperationState>,
}

impl AssetPatch {
    /// Whether the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.asset_tag.is_none()
            && self.serial_number.is_none()
            && self.purchase_date.is_none()
            && self.supplier.is_none()
            && self.description.is_none()
            && self.notes.is_none()
            && self.operation_state.is_none()
    }
}

/// State delta produced by the transition engine.
///
/// `None` fields are left unchanged; location is only ever set, never
/// cleared, by a transition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetStateChange {
    /// New lifecycle status.
    pub status: Option<AssetStatus>,
    /// New location.
    pub location_id: Option<Uuid>,
    /// New operational state.
    pub operation_state: Option<OperationState>,
}
