//! # assethub-core
//!
//! Core crate for AssetHub. Contains the registry traits that the
//! lifecycle engine runs against, configuration schemas, pagination and
//! filter types, and the unified error system.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
