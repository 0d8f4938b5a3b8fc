//! Entry collection routes: submit a new entry, list a user's entries,
//! and the global index.

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use crate::error::JournalError;
use crate::query::{self, EntryForm};
use crate::render::entry;
use crate::state::AppState;

/// `POST /submit/{user_id}` — create an entry and render it as a card.
///
/// The stored row is fetched back so the card shows the exact
/// server-assigned timestamp. A store failure is surfaced as a plain
/// user-visible message.
pub async fn submit_entry(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Form(form): Form<EntryForm>,
) -> Response {
    let stored = match query::create_entry(&state.pool, user_id, &form).await {
        Ok(entry_id) => query::get_entry(&state.pool, entry_id).await,
        Err(err) => Err(err),
    };

    match stored {
        Ok(Some(created)) => entry::entry_card(&created).into_response(),
        Ok(None) => "Error submitting entry. Please try again.".into_response(),
        Err(err) => {
            tracing::error!(error = %err, user_id, "error submitting entry");
            "Error submitting entry. Please try again.".into_response()
        }
    }
}

/// `GET /view_entries/{user_id}` — that user's entries, newest first.
pub async fn view_entries(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Response, JournalError> {
    let entries = query::list_entries_for_user(&state.pool, user_id).await?;
    Ok(entry::user_entries_page(&entries).into_response())
}

/// `GET /all_entries` — global index of (title, username) links.
pub async fn all_entries(State(state): State<AppState>) -> Result<Response, JournalError> {
    let listings = query::list_all_entries(&state.pool).await?;
    Ok(entry::all_entries_page(&listings).into_response())
}
