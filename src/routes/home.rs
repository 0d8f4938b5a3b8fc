//! Start page — username form plus a link to the global index.

use axum::extract::State;
use axum::response::IntoResponse;

use crate::render::forms;
use crate::state::AppState;

/// Render the start page, titled with the configured site name.
pub async fn home_page(State(state): State<AppState>) -> impl IntoResponse {
    forms::login_page(&state.config.site_name)
}
