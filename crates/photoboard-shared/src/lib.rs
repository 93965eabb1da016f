//! # Photoboard Shared
//!
//! Wire types shared by the HTTP layer: form bodies, query strings and JSON
//! views.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
