//! SQLite query layer for users and journal entries.
//!
//! All operations borrow the shared pool; sqlx acquires a connection per
//! statement and releases it on every exit path. No sqlx error escapes
//! unwrapped - every operation returns [`JournalError`] on failure, and
//! "not found" is an `Option`/`bool`, never an error.

use chrono::NaiveDateTime;
use serde::Deserialize;
use sqlx::{FromRow, SqlitePool};

use crate::error::JournalError;

/// A full row from the `entries` table.
#[derive(Debug, Clone, FromRow)]
pub struct Entry {
    /// Surrogate primary key.
    pub id: i64,
    /// Owning user id. Not enforced as live - orphans are possible in
    /// principle, though users are never deleted.
    pub user_id: i64,
    /// Entry title.
    pub title: String,
    /// Free-form story text.
    pub content: String,
    /// Optional free-text fields.
    pub occupation: Option<String>,
    pub week_details: Option<String>,
    pub hobbies: Option<String>,
    pub hometown: Option<String>,
    pub weekend_plans: Option<String>,
    /// Last-modified time (UTC). Set on creation, refreshed on every update.
    pub timestamp: NaiveDateTime,
}

/// One line of the global entry index: entry joined with its author.
#[derive(Debug, Clone, FromRow)]
pub struct EntryListing {
    /// Entry id.
    pub id: i64,
    /// Entry title.
    pub title: String,
    /// Author's username.
    pub username: String,
}

/// Form payload shared by the submit and update routes.
///
/// Title and content are required; the remaining fields default to empty
/// strings when the form omits them. No validation beyond presence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryForm {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub week_details: String,
    #[serde(default)]
    pub hobbies: String,
    #[serde(default)]
    pub hometown: String,
    #[serde(default)]
    pub weekend_plans: String,
}

/// Return the id for `username`, creating the user if absent.
///
/// Atomic upsert: the no-op `DO UPDATE` makes `RETURNING` yield the
/// existing id on conflict, so there is no insert-then-catch sequence.
/// The username is stored as-is, with no normalization.
pub async fn get_or_create_user(
    pool: &SqlitePool,
    username: &str,
) -> Result<i64, JournalError> {
    let user_id: i64 = sqlx::query_scalar(
        "INSERT INTO users (username) VALUES (?) \
         ON CONFLICT(username) DO UPDATE SET username = excluded.username \
         RETURNING id",
    )
    .bind(username)
    .fetch_one(pool)
    .await?;

    tracing::info!(username = %username, user_id, "user ready");
    Ok(user_id)
}

/// Look up a user id by username.
pub async fn get_user_id(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<i64>, JournalError> {
    let user_id = sqlx::query_scalar("SELECT id FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(user_id)
}

/// Insert a new entry for `user_id` and return its id.
///
/// The timestamp is server-assigned by the column default.
pub async fn create_entry(
    pool: &SqlitePool,
    user_id: i64,
    form: &EntryForm,
) -> Result<i64, JournalError> {
    let entry_id: i64 = sqlx::query_scalar(
        "INSERT INTO entries \
         (user_id, title, content, occupation, week_details, hobbies, hometown, weekend_plans) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
         RETURNING id",
    )
    .bind(user_id)
    .bind(&form.title)
    .bind(&form.content)
    .bind(&form.occupation)
    .bind(&form.week_details)
    .bind(&form.hobbies)
    .bind(&form.hometown)
    .bind(&form.weekend_plans)
    .fetch_one(pool)
    .await?;

    tracing::info!(user_id, entry_id, "entry created");
    Ok(entry_id)
}

/// Fetch a single entry by id.
pub async fn get_entry(
    pool: &SqlitePool,
    entry_id: i64,
) -> Result<Option<Entry>, JournalError> {
    let entry = sqlx::query_as::<_, Entry>(
        "SELECT id, user_id, title, content, occupation, week_details, \
         hobbies, hometown, weekend_plans, timestamp \
         FROM entries WHERE id = ?",
    )
    .bind(entry_id)
    .fetch_optional(pool)
    .await?;

    if entry.is_none() {
        tracing::warn!(entry_id, "no entry found");
    }
    Ok(entry)
}

/// All entries for one user, most recent first.
pub async fn list_entries_for_user(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<Entry>, JournalError> {
    let entries = sqlx::query_as::<_, Entry>(
        "SELECT id, user_id, title, content, occupation, week_details, \
         hobbies, hometown, weekend_plans, timestamp \
         FROM entries WHERE user_id = ? ORDER BY timestamp DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    tracing::info!(user_id, count = entries.len(), "entries retrieved");
    Ok(entries)
}

/// Global index of every entry joined with its author, most recent first.
pub async fn list_all_entries(pool: &SqlitePool) -> Result<Vec<EntryListing>, JournalError> {
    let listings = sqlx::query_as::<_, EntryListing>(
        "SELECT e.id, e.title, u.username \
         FROM entries e \
         JOIN users u ON e.user_id = u.id \
         ORDER BY e.timestamp DESC",
    )
    .fetch_all(pool)
    .await?;

    tracing::info!(count = listings.len(), "all entries retrieved");
    Ok(listings)
}

/// Replace every text field of an entry and refresh its timestamp.
///
/// Returns `false` when no row has that id; this is a normal outcome,
/// not an error. Last writer wins - there is no concurrency check.
pub async fn update_entry(
    pool: &SqlitePool,
    entry_id: i64,
    form: &EntryForm,
) -> Result<bool, JournalError> {
    let result = sqlx::query(
        "UPDATE entries \
         SET title = ?, content = ?, occupation = ?, week_details = ?, \
             hobbies = ?, hometown = ?, weekend_plans = ?, \
             timestamp = strftime('%Y-%m-%d %H:%M:%f', 'now') \
         WHERE id = ?",
    )
    .bind(&form.title)
    .bind(&form.content)
    .bind(&form.occupation)
    .bind(&form.week_details)
    .bind(&form.hobbies)
    .bind(&form.hometown)
    .bind(&form.weekend_plans)
    .bind(entry_id)
    .execute(pool)
    .await?;

    let updated = result.rows_affected() > 0;
    if updated {
        tracing::info!(entry_id, "entry updated");
    } else {
        tracing::warn!(entry_id, "no entry found to update");
    }
    Ok(updated)
}
