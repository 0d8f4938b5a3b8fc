//! Error types for the journal service.
//!
//! Errors are rendered as simple HTML error pages rather than JSON,
//! since this is a user-facing HTML service. "Entry not found" is not
//! an error at all - handlers render a not-found fragment for it.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};

/// Journal service error type.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    /// SQLite query or connection error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for JournalError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::Database(err) => {
                tracing::error!(error = %err, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Service Unavailable",
                    "The journal database is temporarily unavailable. Please try again later.",
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) " — Story Journal" }
                    style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href="/" { "Home" }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}
