#[cfg(feature = "postgres")]
use std::sync::Arc;
#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

#[cfg(feature = "postgres")]
use super::postgres_repo::PostgresPostRepository;

/// Configuration for the post database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Connection pool to the post database.
///
/// Opened once at process start with [`DatabaseConnections::init`] and
/// released with [`DatabaseConnections::close`] at shutdown.
///
/// # Example
/// ```ignore
/// let db = DatabaseConnections::init(&config).await?;
/// let repo = db.post_repository();
/// // ... serve requests, then drop every repository handle ...
/// db.close().await?;
/// ```
#[cfg(feature = "postgres")]
pub struct DatabaseConnections {
    main: Arc<DbConn>,
}

#[cfg(feature = "postgres")]
impl DatabaseConnections {
    /// Open the connection pool described by `config`.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(false)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        Ok(Self::from_connection(main))
    }

    /// Wrap an already open connection.
    pub fn from_connection(main: DbConn) -> Self {
        Self {
            main: Arc::new(main),
        }
    }

    /// Post repository sharing this pool.
    pub fn post_repository(&self) -> PostgresPostRepository {
        PostgresPostRepository::shared(Arc::clone(&self.main))
    }

    /// Close the pool, waiting for checked-out connections to return.
    ///
    /// Returns `Ok(false)` when a repository still holds the pool; it is then
    /// released when the last handle drops.
    pub async fn close(self) -> Result<bool, DbErr> {
        match Arc::into_inner(self.main) {
            Some(conn) => {
                conn.close().await?;
                tracing::info!("Database connection closed");
                Ok(true)
            }
            None => {
                tracing::warn!("Database pool still in use; it closes when the last handle drops");
                Ok(false)
            }
        }
    }
}
