//! Lifecycle actions and offboarding dispositions.
//!
//! [`LifecycleAction`] carries the whole transition table: which statuses
//! an action is legal from and which status it produces. The transition
//! engine consults these methods rather than hard-coding the table.

pub mod action;
pub mod disposition;

pub use action::LifecycleAction;
pub use disposition::Disposition;
