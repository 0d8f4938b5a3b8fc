//! Single-entry routes: detail view, edit form, and update.
//!
//! All three address an entry by id and render the uniform not-found
//! notice when the id does not resolve; that is a normal outcome, not
//! a failed request.

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use crate::error::JournalError;
use crate::query::{self, EntryForm};
use crate::render::{entry, forms};
use crate::state::AppState;

/// `GET /view_entry/{entry_id}` — full detail view or not-found notice.
pub async fn view_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<i64>,
) -> Result<Response, JournalError> {
    let page = match query::get_entry(&state.pool, entry_id).await? {
        Some(stored) => entry::entry_detail_page(&stored),
        None => entry::not_found_page(entry_id),
    };
    Ok(page.into_response())
}

/// `GET /edit/{entry_id}` — pre-filled edit form or not-found notice.
pub async fn edit_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<i64>,
) -> Result<Response, JournalError> {
    let page = match query::get_entry(&state.pool, entry_id).await? {
        Some(stored) => forms::edit_form_page(&stored),
        None => entry::not_found_page(entry_id),
    };
    Ok(page.into_response())
}

/// `POST /update/{entry_id}` — replace every field and refresh the
/// timestamp, then show a transient confirmation that redirects back to
/// the detail view.
///
/// An unknown id renders the not-found notice; a store failure is
/// surfaced as a plain message.
pub async fn update_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<i64>,
    Form(form): Form<EntryForm>,
) -> Response {
    match query::update_entry(&state.pool, entry_id, &form).await {
        Ok(true) => entry::update_confirmation(entry_id).into_response(),
        Ok(false) => entry::not_found_page(entry_id).into_response(),
        Err(err) => {
            tracing::error!(error = %err, entry_id, "error updating entry");
            "Error updating entry. Please try again.".into_response()
        }
    }
}
