//! Organisation unit entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// What kind of place or party an organisation unit represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "org_unit_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrgUnitCategory {
    /// A staffed department.
    Department,
    /// A storage warehouse.
    Warehouse,
    /// Long-term archive storage.
    Archive,
    /// An external vendor (e.g. a repair shop).
    Vendor,
}

impl OrgUnitCategory {
    /// Return the category as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Department => "department",
            Self::Warehouse => "warehouse",
            Self::Archive => "archive",
            Self::Vendor => "vendor",
        }
    }
}

impl fmt::Display for OrgUnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrgUnitCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "department" => Ok(Self::Department),
            "warehouse" => Ok(Self::Warehouse),
            "archive" => Ok(Self::Archive),
            "vendor" => Ok(Self::Vendor),
            _ => Err(format!(
                "Invalid organisation unit category: '{s}'. Expected one of: department, warehouse, archive, vendor"
            )),
        }
    }
}

/// A department, warehouse, archive, or vendor that can hold assets.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrganisationUnit {
    /// Unique unit identifier.
    pub id: Uuid,
    /// Unit name.
    pub name: String,
    /// Unit category.
    pub category: OrgUnitCategory,
    /// Free-form description.
    pub description: Option<String>,
    /// When the unit was registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to register a new organisation unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrganisationUnit {
    /// Unit name.
    pub name: String,
    /// Unit category.
    pub category: OrgUnitCategory,
    /// Description.
    pub description: Option<String>,
}

/// Updatable organisation unit fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrgUnitPatch {
    /// New name.
    pub name: Option<String>,
    /// New category.
    pub category: Option<OrgUnitCategory>,
    /// New description.
    pub description: Option<String>,
}
