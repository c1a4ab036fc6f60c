//! Audit event action enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The action an audit event records.
///
/// `created` is appended when an asset is registered; the remaining
/// variants mirror the lifecycle actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "event_action", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EventAction {
    /// Asset registered in the system.
    Created,
    /// Asset deployed to a person.
    Deploy,
    /// Asset returned to storage.
    Return,
    /// Asset sent to repair.
    Repair,
    /// Asset retired from service.
    Retire,
    /// Asset moved to another location.
    Move,
}

impl EventAction {
    /// Return the action as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Deploy => "deploy",
            Self::Return => "return",
            Self::Repair => "repair",
            Self::Retire => "retire",
            Self::Move => "move",
        }
    }
}

impl fmt::Display for EventAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
