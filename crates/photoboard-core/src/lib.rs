//! # Photoboard Core
//!
//! The domain layer of the photo board.
//! This crate contains the post lifecycle with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError};
pub use service::{PostService, ShowOutcome};
