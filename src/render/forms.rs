//! Form builders: the login form, the journaling form, and the edit form.

use maud::{Markup, html};

use super::components::page_shell;
use crate::query::Entry;

/// The start page: username form plus a link to the global index.
///
/// Titled with the configured site name. The form posts to `/journal`
/// and swaps the journaling form into `#content` without a full page
/// reload.
pub fn login_page(site_name: &str) -> Markup {
    let body = html! {
        form id="login-form" {
            input id="username" name="username" placeholder="Enter your username";
            button hx-post="/journal" hx-target="#content" { "Start Journaling" }
        }
        a href="/all_entries" { "View All Entries" }
        div id="content" {}
    };
    page_shell(site_name, body)
}

/// The journaling form fragment, shown after the user identifies.
///
/// The title is pre-filled with today's date; submission swaps the
/// rendered entry card into `#entries`.
pub fn journal_form(user_id: i64, username: &str) -> Markup {
    let current_date = chrono::Local::now().format("%Y%m%d");
    let title = format!("Entry {current_date}");

    html! {
        h2 { "Welcome, " (username) "!" }
        form id="entry-form" {
            div { "Title:" input id="entry-title" name="title" value=(title); }
            div { "Story:" textarea id="entry-content" name="content" placeholder="Write your story here..." {} }
            div { "Occupation:" input id="occupation" name="occupation" placeholder="Your occupation"; }
            div { "Week Details:" textarea id="week-details" name="week_details" placeholder="Details about your week" {} }
            div { "Hobbies:" textarea id="hobbies" name="hobbies" placeholder="Your hobbies" {} }
            div { "Hometown:" input id="hometown" name="hometown" placeholder="Your hometown"; }
            div { "Weekend Plans:" textarea id="weekend-plans" name="weekend_plans" placeholder="Your upcoming weekend plans" {} }
            button hx-post=(format!("/submit/{user_id}")) hx-target="#entries" { "Submit" }
        }
        a href=(format!("/view_entries/{user_id}")) { "View Previous Entries" }
        div id="entries" {}
    }
}

/// The edit page: form pre-populated with the entry's current values,
/// posting to `/update/{id}` with the confirmation swapped into
/// `#notification`.
pub fn edit_form_page(entry: &Entry) -> Markup {
    let id = entry.id;
    let body = html! {
        form id=(format!("edit-form-{id}")) {
            div {
                "Title:"
                input id=(format!("edit-title-{id}")) name="title" value=(entry.title);
            }
            div {
                "Story:"
                textarea id=(format!("edit-content-{id}")) name="content" placeholder="Write your story here..." {
                    (entry.content)
                }
            }
            div {
                "Occupation:"
                input id=(format!("edit-occupation-{id}")) name="occupation" placeholder="Your occupation"
                    value=(entry.occupation.as_deref().unwrap_or(""));
            }
            div {
                "Week Details:"
                textarea id=(format!("edit-week-details-{id}")) name="week_details" placeholder="Details about your week" {
                    (entry.week_details.as_deref().unwrap_or(""))
                }
            }
            div {
                "Hobbies:"
                textarea id=(format!("edit-hobbies-{id}")) name="hobbies" placeholder="Your hobbies" {
                    (entry.hobbies.as_deref().unwrap_or(""))
                }
            }
            div {
                "Hometown:"
                input id=(format!("edit-hometown-{id}")) name="hometown" placeholder="Your hometown"
                    value=(entry.hometown.as_deref().unwrap_or(""));
            }
            div {
                "Weekend Plans:"
                textarea id=(format!("edit-weekend-plans-{id}")) name="weekend_plans" placeholder="Your upcoming weekend plans" {
                    (entry.weekend_plans.as_deref().unwrap_or(""))
                }
            }
            button hx-post=(format!("/update/{id}")) hx-target="#notification" { "Save" }
        }
        div id="notification" {}
    };
    page_shell(&format!("Edit Entry {id}"), body)
}
