//! # Photoboard Infrastructure
//!
//! Concrete implementations of the ports defined in `photoboard-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL row-store via SeaORM
//!
//! The in-memory store is always available.

pub mod database;

pub use database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
pub use database::SeaOrmPostRepository;
