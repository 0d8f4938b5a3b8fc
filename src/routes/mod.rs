//! Route definitions for the journal service.
//!
//! ## Routes
//!
//! - `GET /` - Start page (username form)
//! - `GET /health` - Health check (JSON)
//! - `POST /journal` - Get-or-create user, journaling form fragment
//! - `POST /submit/{user_id}` - Create an entry, rendered card fragment
//! - `GET /view_entries/{user_id}` - One user's entries, newest first
//! - `GET /all_entries` - Global index of (title, username) links
//! - `GET /view_entry/{entry_id}` - Full detail view or not-found notice
//! - `GET /edit/{entry_id}` - Pre-filled edit form or not-found notice
//! - `POST /update/{entry_id}` - Apply update, transient confirmation

mod entries;
mod entry;
mod health;
mod home;
mod journal;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

/// Build the complete journal service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_page))
        .route("/health", get(health::health_check))
        .route("/journal", post(journal::start_journal))
        .route("/submit/{user_id}", post(entries::submit_entry))
        .route("/view_entries/{user_id}", get(entries::view_entries))
        .route("/all_entries", get(entries::all_entries))
        .route("/view_entry/{entry_id}", get(entry::view_entry))
        .route("/edit/{entry_id}", get(entry::edit_entry))
        .route("/update/{entry_id}", post(entry::update_entry))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::db::tests::test_pool;
    use crate::state::AppState;

    /// Router over a fresh in-memory database.
    async fn test_app() -> Router {
        test_app_with_site("Story Journal").await
    }

    async fn test_app_with_site(site_name: &str) -> Router {
        let state = AppState {
            pool: test_pool().await,
            config: Arc::new(Config {
                bind_addr: "127.0.0.1:0".to_string(),
                database_url: "sqlite::memory:".to_string(),
                site_name: site_name.to_string(),
            }),
        };
        super::router(state)
    }

    async fn get_body(app: &Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn post_form(app: &Router, uri: &str, body: &str) -> (StatusCode, String) {
        let response = app
            .clone()
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    const SAMPLE_ENTRY: &str = "title=Entry%2020240101&content=Hello&occupation=Engineer\
                                &week_details=Busy&hobbies=Chess&hometown=Springfield\
                                &weekend_plans=Hiking";

    #[tokio::test]
    async fn home_page_serves_login_form() {
        let app = test_app().await;
        let (status, body) = get_body(&app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("name=\"username\""));
        assert!(body.contains("Start Journaling"));
    }

    #[tokio::test]
    async fn home_page_titled_with_configured_site_name() {
        let app = test_app_with_site("My Journal").await;
        let (status, body) = get_body(&app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>My Journal</title>"));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = test_app().await;
        let (status, body) = get_body(&app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        let health: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(health["status"], "ok");
        assert_eq!(health["service"], "story-journal");
    }

    #[tokio::test]
    async fn journal_greets_new_and_returning_user() {
        let app = test_app().await;

        let (status, body) = post_form(&app, "/journal", "username=alice").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Welcome, alice!"));

        // Same username again: same user, same form.
        let (status, body) = post_form(&app, "/journal", "username=alice").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Welcome, alice!"));
    }

    #[tokio::test]
    async fn submit_then_view_entry_round_trips() {
        let app = test_app().await;
        post_form(&app, "/journal", "username=alice").await;

        let (status, card) = post_form(&app, "/submit/1", SAMPLE_ENTRY).await;
        assert_eq!(status, StatusCode::OK);
        assert!(card.contains("Entry 20240101"));
        assert!(card.contains("Story: Hello"));

        let (status, detail) = get_body(&app, "/view_entry/1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(detail.contains("Entry 20240101"));
        assert!(detail.contains("Engineer"));
        assert!(detail.contains("href=\"/edit/1\""));
    }

    #[tokio::test]
    async fn submitted_card_shows_the_stored_timestamp() {
        let app = test_app().await;
        post_form(&app, "/journal", "username=alice").await;

        let (_, card) = post_form(&app, "/submit/1", SAMPLE_ENTRY).await;
        let posted = &card.split("Posted on: ").nth(1).unwrap()[..19];

        // The detail view reads the same row, so the second-precision
        // display must match exactly.
        let (_, detail) = get_body(&app, "/view_entry/1").await;
        assert!(detail.contains(posted));
    }

    #[tokio::test]
    async fn view_entries_lists_only_that_user() {
        let app = test_app().await;
        post_form(&app, "/journal", "username=alice").await;
        post_form(&app, "/journal", "username=bob").await;
        post_form(&app, "/submit/1", SAMPLE_ENTRY).await;

        let (status, body) = get_body(&app, "/view_entries/1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Entry 20240101"));

        let (status, body) = get_body(&app, "/view_entries/2").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("Entry 20240101"));
    }

    #[tokio::test]
    async fn all_entries_index_links_by_author() {
        let app = test_app().await;
        post_form(&app, "/journal", "username=alice").await;
        post_form(&app, "/submit/1", SAMPLE_ENTRY).await;

        let (status, body) = get_body(&app, "/all_entries").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Entry 20240101 by alice"));
        assert!(body.contains("href=\"/view_entry/1\""));
    }

    #[tokio::test]
    async fn unknown_entry_renders_not_found_notice() {
        let app = test_app().await;

        let (status, body) = get_body(&app, "/view_entry/999").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Entry 999 not found."));

        let (status, body) = get_body(&app, "/edit/999").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Entry 999 not found."));
    }

    #[tokio::test]
    async fn edit_form_is_prefilled_from_store() {
        let app = test_app().await;
        post_form(&app, "/journal", "username=alice").await;
        post_form(&app, "/submit/1", SAMPLE_ENTRY).await;

        let (status, body) = get_body(&app, "/edit/1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("value=\"Entry 20240101\""));
        assert!(body.contains("hx-post=\"/update/1\""));
    }

    #[tokio::test]
    async fn update_confirms_and_is_visible_on_detail() {
        let app = test_app().await;
        post_form(&app, "/journal", "username=alice").await;
        post_form(&app, "/submit/1", SAMPLE_ENTRY).await;

        let edited = "title=Entry%2020240101-edit&content=Goodbye&occupation=Engineer\
                      &week_details=Busy&hobbies=Chess&hometown=Springfield&weekend_plans=Rest";
        let (status, body) = post_form(&app, "/update/1", edited).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Changes saved successfully at"));
        assert!(body.contains("/view_entry/1"));

        let (_, detail) = get_body(&app, "/view_entry/1").await;
        assert!(detail.contains("Entry 20240101-edit"));
        assert!(detail.contains("Goodbye"));
        assert!(!detail.contains("Hello"));
    }

    #[tokio::test]
    async fn update_unknown_entry_renders_not_found_notice() {
        let app = test_app().await;

        let (status, body) = post_form(&app, "/update/999", SAMPLE_ENTRY).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Entry 999 not found."));
    }
}
