//! Application state shared across all request handlers.

use std::str::FromStr;
use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::Config;
use crate::db;

/// Pool size. Connections are acquired per statement and released on
/// every exit path; a handful is plenty for a single-user journal.
const MAX_CONNECTIONS: u32 = 5;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool for domain operations.
    pub pool: SqlitePool,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new application state from configuration.
    ///
    /// Connects the pool (creating the database file if missing) and
    /// bootstraps the schema.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let options =
            SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        db::ensure_schema(&pool).await?;

        tracing::info!(
            database_url = %config.database_url,
            max_connections = MAX_CONNECTIONS,
            "application state initialized"
        );

        Ok(Self {
            pool,
            config: Arc::new(config),
        })
    }
}
