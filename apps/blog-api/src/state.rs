//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::PostStore;
use blog_core::domain::Category;
use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use blog_infra::DatabaseConnections;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostStore,
    pub categories: Arc<[Category]>,
}

/// Storage resources owned by `main` and released after the server stops.
#[derive(Default)]
pub struct Storage {
    #[cfg(feature = "postgres")]
    db: Option<DatabaseConnections>,
}

impl Storage {
    /// Close the database pool, if one was opened.
    pub async fn close(self) {
        #[cfg(feature = "postgres")]
        if let Some(db) = self.db {
            if let Err(e) = db.close().await {
                tracing::error!("Failed to close database connection: {}", e);
            }
        }
    }
}

impl AppState {
    /// Build state over an already constructed repository.
    pub fn with_repository(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: PostStore::new(repo),
            categories: Category::builtin().into(),
        }
    }

    /// Build the application state, falling back to in-memory storage when
    /// no database is configured or reachable.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> (Self, Storage) {
        #[cfg(feature = "postgres")]
        let (state, storage) = match db_config {
            Some(config) => match DatabaseConnections::init(config).await {
                Ok(connections) => {
                    let state = Self::with_repository(Arc::new(connections.post_repository()));
                    let storage = Storage {
                        db: Some(connections),
                    };
                    (state, storage)
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    (Self::in_memory(), Storage::default())
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (Self::in_memory(), Storage::default())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (state, storage) = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            (Self::in_memory(), Storage::default())
        };

        tracing::info!("Application state initialized");
        (state, storage)
    }

    /// State backed by a fresh in-memory repository.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::new()))
    }
}
