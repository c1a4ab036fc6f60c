//! Asset lifecycle status and operational health enumerations.
//!
//! The two enums are deliberately independent: `AssetStatus` tracks where
//! an asset sits in its lifecycle, while `OperationState` tracks whether
//! the physical device is currently healthy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "asset_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    /// Deployed to a person and in use.
    Active,
    /// In stock, available for deployment.
    Spare,
    /// Out for maintenance or repair.
    Repair,
    /// Permanently removed from service. Terminal.
    Retired,
}

impl AssetStatus {
    /// Whether any further lifecycle transition is permitted.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Retired)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Spare => "spare",
            Self::Repair => "repair",
            Self::Retired => "retired",
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "spare" => Ok(Self::Spare),
            "repair" => Ok(Self::Repair),
            "retired" => Ok(Self::Retired),
            _ => Err(format!(
                "Invalid asset status: '{s}'. Expected one of: active, spare, repair, retired"
            )),
        }
    }
}

/// Operational health of an asset, orthogonal to its lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "operation_state", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OperationState {
    /// Device works as expected.
    Normal,
    /// An incident is open against the device.
    Incident,
    /// Device is being serviced.
    Repair,
    /// Device has been written off.
    Decommissioned,
}

impl OperationState {
    /// Return the state as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Incident => "incident",
            Self::Repair => "repair",
            Self::Decommissioned => "decommissioned",
        }
    }
}

impl fmt::Display for OperationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OperationState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "incident" => Ok(Self::Incident),
            "repair" => Ok(Self::Repair),
            "decommissioned" => Ok(Self::Decommissioned),
            _ => Err(format!(
                "Invalid operation state: '{s}'. Expected one of: normal, incident, repair, decommissioned"
            )),
        }
    }
}
