//! Request and response DTOs.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
