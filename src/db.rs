//! Schema bootstrap for the journal database.
//!
//! Two tables: `users` and `entries`. Creation is idempotent; the
//! `sqlite_master` check up front is an optimization so a warm start
//! logs "already exists" instead of re-running the DDL.

use sqlx::SqlitePool;

const CREATE_USERS: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    username TEXT UNIQUE NOT NULL
)";

// Timestamps are stored as text with millisecond precision so an update
// made shortly after creation is still observably later.
const CREATE_ENTRIES: &str = "\
CREATE TABLE IF NOT EXISTS entries (
    id INTEGER PRIMARY KEY,
    user_id INTEGER,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    occupation TEXT,
    week_details TEXT,
    hobbies TEXT,
    hometown TEXT,
    weekend_plans TEXT,
    timestamp TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now')),
    FOREIGN KEY (user_id) REFERENCES users (id)
)";

/// Create the `users` and `entries` tables if they are absent.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let existing: i64 = sqlx::query_scalar(
        "SELECT count(*) FROM sqlite_master \
         WHERE type = 'table' AND name IN ('users', 'entries')",
    )
    .fetch_one(pool)
    .await?;

    if existing < 2 {
        sqlx::query(CREATE_USERS).execute(pool).await?;
        sqlx::query(CREATE_ENTRIES).execute(pool).await?;
        tracing::info!("database setup successful - tables created");
    } else {
        tracing::info!("database already exists - no setup needed");
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    /// Fresh in-memory database with the schema applied.
    ///
    /// A single connection, so every statement sees the same in-memory
    /// database.
    pub(crate) async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("connect in-memory sqlite");
        ensure_schema(&pool).await.expect("bootstrap schema");
        pool
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let pool = test_pool().await;
        // Second run takes the "already exists" branch and must not fail.
        ensure_schema(&pool).await.unwrap();

        sqlx::query("INSERT INTO users (username) VALUES ('alice')")
            .execute(&pool)
            .await
            .unwrap();
        let count: i64 = sqlx::query_scalar("SELECT count(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn schema_enforces_unique_usernames() {
        let pool = test_pool().await;
        sqlx::query("INSERT INTO users (username) VALUES ('alice')")
            .execute(&pool)
            .await
            .unwrap();
        let dup = sqlx::query("INSERT INTO users (username) VALUES ('alice')")
            .execute(&pool)
            .await;
        assert!(dup.is_err());
    }
}
