//! Immutable audit events recording every asset lifecycle change.

pub mod action;
pub mod model;

pub use action::EventAction;
pub use model::{AssetEvent, NewAssetEvent};
