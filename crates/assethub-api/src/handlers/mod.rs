//! Route handlers organized by domain.

pub mod asset;
pub mod catalog;
pub mod dashboard;
pub mod health;
pub mod person;
