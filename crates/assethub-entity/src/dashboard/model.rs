//! Aggregation row models returned by dashboard queries.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::asset::status::AssetStatus;

/// Number of assets in one lifecycle status.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StatusCount {
    /// The lifecycle status.
    pub status: AssetStatus,
    /// How many assets hold it.
    pub count: i64,
}

/// Number of assets under one label (asset type name, department name, ...).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LabelCount {
    /// Grouping label.
    pub label: String,
    /// How many assets fall under it.
    pub count: i64,
}
