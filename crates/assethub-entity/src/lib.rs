//! # assethub-entity
//!
//! Domain entity models for AssetHub. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.
//!
//! This crate has **no** internal dependencies on other AssetHub crates.

pub mod asset;
pub mod assignment;
pub mod catalog;
pub mod dashboard;
pub mod event;
pub mod lifecycle;
pub mod org_unit;
pub mod person;
pub mod relationship;
