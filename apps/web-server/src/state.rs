//! Application state - shared across all handlers.

use std::sync::Arc;

use photoboard_core::PostService;
use photoboard_core::ports::PostRepository;
use photoboard_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use photoboard_infra::SeaOrmPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    /// Build the state around an explicit post store.
    pub fn with_repository(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: PostService::new(repo),
        }
    }

    /// Build the application state with the configured store.
    ///
    /// Falls back to the in-memory store when no database is configured or
    /// the connection fails.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let repo: Arc<dyn PostRepository> = match db_config {
            Some(config) => match photoboard_infra::database::connect(config).await {
                Ok(conn) => Arc::new(SeaOrmPostRepository::new(conn)),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Arc::new(InMemoryPostRepository::new())
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let repo: Arc<dyn PostRepository> = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored without the postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            Arc::new(InMemoryPostRepository::new())
        };

        tracing::info!("Application state initialized");

        Self::with_repository(repo)
    }
}
