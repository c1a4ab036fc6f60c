//! Offboarding disposition enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::action::LifecycleAction;

/// The target lifecycle bucket chosen for an asset during offboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    /// Return the asset to storage.
    Spare,
    /// Send the asset to repair.
    Repair,
    /// Retire the asset.
    Retire,
}

impl Disposition {
    /// The lifecycle action that realizes this disposition.
    pub fn action(&self) -> LifecycleAction {
        match self {
            Self::Spare => LifecycleAction::Return,
            Self::Repair => LifecycleAction::Repair,
            Self::Retire => LifecycleAction::Retire,
        }
    }

    /// Return the disposition as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spare => "spare",
            Self::Repair => "repair",
            Self::Retire => "retire",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Disposition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spare" => Ok(Self::Spare),
            "repair" => Ok(Self::Repair),
            "retire" => Ok(Self::Retire),
            _ => Err(format!(
                "Invalid disposition: '{s}'. Expected one of: spare, repair, retire"
            )),
        }
    }
}
