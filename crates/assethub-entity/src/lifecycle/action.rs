//! Lifecycle action enumeration and the transition table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::asset::status::AssetStatus;
use crate::event::action::EventAction;

/// A named lifecycle action applied to a single asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleAction {
    /// Hand the asset to a person; opens an assignment.
    Deploy,
    /// Take the asset back into storage; closes the assignment.
    Return,
    /// Send the asset to repair; closes the assignment if open.
    Repair,
    /// Permanently remove the asset from service; closes the assignment if open.
    Retire,
    /// Relocate the asset without changing its lifecycle status.
    Move,
}

impl LifecycleAction {
    /// Whether the action is legal from the given status.
    ///
    /// `retired` is absorbing: nothing is legal from it, `move` included.
    pub fn allowed_from(&self, status: AssetStatus) -> bool {
        match self {
            Self::Deploy => matches!(status, AssetStatus::Spare | AssetStatus::Repair),
            Self::Return => matches!(status, AssetStatus::Active),
            Self::Repair => matches!(status, AssetStatus::Active | AssetStatus::Spare),
            Self::Retire => matches!(
                status,
                AssetStatus::Active | AssetStatus::Spare | AssetStatus::Repair
            ),
            Self::Move => !status.is_terminal(),
        }
    }

    /// The status the asset holds after the action. `move` leaves it unchanged.
    pub fn resulting_status(&self, current: AssetStatus) -> AssetStatus {
        match self {
            Self::Deploy => AssetStatus::Active,
            Self::Return => AssetStatus::Spare,
            Self::Repair => AssetStatus::Repair,
            Self::Retire => AssetStatus::Retired,
            Self::Move => current,
        }
    }

    /// Whether the action changes lifecycle status at all.
    pub fn changes_status(&self) -> bool {
        !matches!(self, Self::Move)
    }

    /// Whether the action closes an open assignment when one exists.
    pub fn closes_assignment(&self) -> bool {
        matches!(self, Self::Return | Self::Repair | Self::Retire)
    }

    /// The audit event action recorded for this lifecycle action.
    pub fn event_action(&self) -> EventAction {
        match self {
            Self::Deploy => EventAction::Deploy,
            Self::Return => EventAction::Return,
            Self::Repair => EventAction::Repair,
            Self::Retire => EventAction::Retire,
            Self::Move => EventAction::Move,
        }
    }

    /// Return the action as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deploy => "deploy",
            Self::Return => "return",
            Self::Repair => "repair",
            Self::Retire => "retire",
            Self::Move => "move",
        }
    }
}

impl fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LifecycleAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deploy" => Ok(Self::Deploy),
            "return" => Ok(Self::Return),
            "repair" => Ok(Self::Repair),
            "retire" => Ok(Self::Retire),
            "move" => Ok(Self::Move),
            _ => Err(format!(
                "Invalid lifecycle action: '{s}'. Expected one of: deploy, return, repair, retire, move"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deploy_is_allowed_from_spare_and_repair_only() {
        assert!(LifecycleAction::Deploy.allowed_from(AssetStatus::Spare));
        assert!(LifecycleAction::Deploy.allowed_from(AssetStatus::Repair));
        assert!(!LifecycleAction::Deploy.allowed_from(AssetStatus::Active));
        assert!(!LifecycleAction::Deploy.allowed_from(AssetStatus::Retired));
    }

    #[test]
    fn return_is_allowed_from_active_only() {
        assert!(LifecycleAction::Return.allowed_from(AssetStatus::Active));
        assert!(!LifecycleAction::Return.allowed_from(AssetStatus::Spare));
        assert!(!LifecycleAction::Return.allowed_from(AssetStatus::Repair));
        assert!(!LifecycleAction::Return.allowed_from(AssetStatus::Retired));
    }

    #[test]
    fn nothing_is_allowed_from_retired() {
        for action in [
            LifecycleAction::Deploy,
            LifecycleAction::Return,
            LifecycleAction::Repair,
            LifecycleAction::Retire,
            LifecycleAction::Move,
        ] {
            assert!(!action.allowed_from(AssetStatus::Retired), "{action}");
        }
    }

    #[test]
    fn move_preserves_the_current_status() {
        assert_eq!(
            LifecycleAction::Move.resulting_status(AssetStatus::Active),
            AssetStatus::Active
        );
        assert_eq!(
            LifecycleAction::Move.resulting_status(AssetStatus::Spare),
            AssetStatus::Spare
        );
        assert!(!LifecycleAction::Move.changes_status());
    }

    #[test]
    fn closing_actions_match_the_transition_table() {
        assert!(!LifecycleAction::Deploy.closes_assignment());
        assert!(!LifecycleAction::Move.closes_assignment());
        assert!(LifecycleAction::Return.closes_assignment());
        assert!(LifecycleAction::Repair.closes_assignment());
        assert!(LifecycleAction::Retire.closes_assignment());
    }
}
