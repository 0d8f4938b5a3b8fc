//! `POST /journal` — identify (or register) a user and hand back the
//! journaling form fragment.

use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::query;
use crate::render::forms;
use crate::state::AppState;

/// Login form payload.
#[derive(Debug, Deserialize)]
pub struct JournalForm {
    pub username: String,
}

/// Get-or-create the user and render the journaling form.
///
/// A store failure is surfaced as a plain user-visible message, not a
/// structured error.
pub async fn start_journal(
    State(state): State<AppState>,
    Form(form): Form<JournalForm>,
) -> Response {
    match query::get_or_create_user(&state.pool, &form.username).await {
        Ok(user_id) => forms::journal_form(user_id, &form.username).into_response(),
        Err(err) => {
            tracing::error!(error = %err, username = %form.username, "error creating user");
            "Error creating user. Please try again.".into_response()
        }
    }
}
