//! Domain-level error types.

use thiserror::Error;

/// Domain errors - failures of a post operation.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Repository(#[from] RepoError),
}

/// Row-store errors.
///
/// None of these are recovered by the domain layer; they surface to the
/// caller as a generic server failure.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
