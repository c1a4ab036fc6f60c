//! Asset relationship entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Kind of directed edge between two assets.
///
/// Both kinds mark the child as a peripheral of the parent; the cascade
/// treats them identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "relation_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    /// Child is physically attached to the parent (e.g. a dock).
    AttachedTo,
    /// Child is a peripheral of the parent (e.g. a monitor).
    PeripheralOf,
}

impl RelationType {
    /// Return the relation as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AttachedTo => "attached_to",
            Self::PeripheralOf => "peripheral_of",
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RelationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "attached_to" => Ok(Self::AttachedTo),
            "peripheral_of" => Ok(Self::PeripheralOf),
            _ => Err(format!(
                "Invalid relation type: '{s}'. Expected one of: attached_to, peripheral_of"
            )),
        }
    }
}

/// A directed parent→child edge between two assets.
///
/// Relationships carry no lifecycle state of their own; they exist only
/// so the cascade can discover peripherals of a primary device.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssetRelationship {
    /// Unique relationship identifier.
    pub id: Uuid,
    /// The primary device.
    pub parent_asset_id: Uuid,
    /// The peripheral.
    pub child_asset_id: Uuid,
    /// Kind of edge.
    pub relation_type: RelationType,
    /// When the edge was recorded.
    pub created_at: DateTime<Utc>,
}
