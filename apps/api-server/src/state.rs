//! Application state - shared across all handlers.

use std::sync::Arc;

use bulletin_core::ports::{PostRepository, UserRepository};
use bulletin_core::service::PostService;
use bulletin_infra::database::DatabaseConfig;
use bulletin_infra::{InMemoryPostRepository, InMemoryUserRepository};

#[cfg(feature = "postgres")]
use bulletin_infra::{PostgresPostRepository, PostgresUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service: PostService,
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Build the application state with appropriate store implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let (users, posts): (Arc<dyn UserRepository>, Arc<dyn PostRepository>) = {
            match db_config {
                Some(config) => match bulletin_infra::database::connect(config).await {
                    Ok(conn) => (
                        Arc::new(PostgresUserRepository::new(conn.clone())),
                        Arc::new(PostgresPostRepository::new(conn)),
                    ),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory stores.",
                            e
                        );
                        Self::memory_stores()
                    }
                },
                None => {
                    tracing::warn!("DATABASE_URL not set. Running on in-memory stores.");
                    Self::memory_stores()
                }
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (users, posts): (Arc<dyn UserRepository>, Arc<dyn PostRepository>) = {
            let _ = db_config;
            tracing::info!("Built without postgres support - using in-memory stores");
            Self::memory_stores()
        };

        tracing::info!("Application state initialized");

        Self {
            service: PostService::new(posts, users.clone()),
            users,
        }
    }

    fn memory_stores() -> (Arc<dyn UserRepository>, Arc<dyn PostRepository>) {
        (
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
        )
    }
}
