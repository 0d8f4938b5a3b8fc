//! Story Journal - a minimal personal journaling web application.
//!
//! Users identify themselves by a username, write free-form diary entries
//! with a handful of fixed fields, and can later browse, view, and edit
//! those entries. Pages and fragments are rendered server-side; fragment
//! swaps are driven by htmx attributes on the forms and buttons.
//!
//! # Architecture
//!
//! - **Query**: domain operations (users, entries) against a SQLite pool
//! - **Render**: HTML fragments and pages built with maud (compile-time
//!   templates, automatic escaping)
//! - **Routes**: one thin axum handler per route, delegating to query +
//!   render and treating "not found" as a normal rendered outcome
//!
//! There is no authentication and no concurrency control beyond what
//! SQLite provides; concurrent edits of the same entry are last-writer-wins.

pub mod config;
pub mod db;
pub mod error;
pub mod query;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
