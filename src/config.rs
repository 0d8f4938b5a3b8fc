//! Application configuration loaded from environment variables.

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// SQLite connection URL (e.g., "sqlite:stories.db").
    pub database_url: String,

    /// Site name shown in page titles.
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults for local development)
    ///
    /// Optional:
    /// - `JOURNAL_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `DATABASE_URL`: SQLite URL (default: "sqlite:stories.db")
    /// - `JOURNAL_SITE_NAME`: Site name (default: "Story Journal")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("JOURNAL_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:stories.db".to_string());

        let site_name =
            std::env::var("JOURNAL_SITE_NAME").unwrap_or_else(|_| "Story Journal".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            database_url = %database_url,
            site_name = %site_name,
            "journal configuration loaded"
        );

        Ok(Self {
            bind_addr,
            database_url,
            site_name,
        })
    }
}
