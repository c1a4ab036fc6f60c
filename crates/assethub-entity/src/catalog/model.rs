//! Catalog entity models: asset types and asset models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A category of asset (laptop, monitor, switch, ...).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssetType {
    /// Unique type identifier.
    pub id: Uuid,
    /// Type name (unique).
    pub name: String,
    /// Broader grouping (e.g. "computing", "display", "network").
    pub category: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// When the type was registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to register a new asset type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAssetType {
    /// Type name.
    pub name: String,
    /// Broader grouping.
    pub category: Option<String>,
    /// Description.
    pub description: Option<String>,
}

/// Updatable asset type fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetTypePatch {
    /// New name.
    pub name: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New description.
    pub description: Option<String>,
}

/// A concrete manufacturer model within an asset type.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssetModelInfo {
    /// Unique model identifier.
    pub id: Uuid,
    /// Manufacturer name.
    pub manufacturer: String,
    /// Manufacturer model number.
    pub model_number: String,
    /// The asset type this model belongs to.
    pub asset_type_id: Uuid,
    /// Default description applied to assets of this model.
    pub default_description: Option<String>,
    /// When the model was registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to register a new asset model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAssetModelInfo {
    /// Manufacturer name.
    pub manufacturer: String,
    /// Manufacturer model number.
    pub model_number: String,
    /// The asset type this model belongs to.
    pub asset_type_id: Uuid,
    /// Default description.
    pub default_description: Option<String>,
}

/// Updatable asset model fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetModelPatch {
    /// New manufacturer.
    pub manufacturer: Option<String>,
    /// New model number.
    pub model_number: Option<String>,
    /// New asset type.
    pub asset_type_id: Option<Uuid>,
    /// New default description.
    pub default_description: Option<String>,
}
