//! Entry renderers: cards, detail view, global index, not-found notice.

use maud::{Markup, PreEscaped, html};

use super::components::{home_link, page_shell};
use crate::query::{Entry, EntryListing};

/// Display format for last-modified times.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single entry as a card fragment with an inline Edit affordance.
///
/// The Edit button swaps the edit form into the card's own div.
pub fn entry_card(entry: &Entry) -> Markup {
    let id = entry.id;
    html! {
        div class="entry-card" id=(format!("entry-{id}")) {
            h3 { (entry.title) }
            p { "Story: " (entry.content) }
            p { "Occupation: " (entry.occupation.as_deref().unwrap_or("")) }
            p { "Week Details: " (entry.week_details.as_deref().unwrap_or("")) }
            p { "Hobbies: " (entry.hobbies.as_deref().unwrap_or("")) }
            p { "Hometown: " (entry.hometown.as_deref().unwrap_or("")) }
            p { "Weekend Plans: " (entry.weekend_plans.as_deref().unwrap_or("")) }
            p { "Posted on: " (entry.timestamp.format(TIME_FORMAT)) }
            button hx-get=(format!("/edit/{id}")) hx-target=(format!("#entry-{id}")) { "Edit" }
        }
    }
}

/// The full detail page: labeled eight-field block plus an edit link.
pub fn entry_detail_page(entry: &Entry) -> Markup {
    let fields = [
        ("Title", entry.title.clone()),
        ("Content", entry.content.clone()),
        ("Occupation", entry.occupation.clone().unwrap_or_default()),
        ("Week Details", entry.week_details.clone().unwrap_or_default()),
        ("Hobbies", entry.hobbies.clone().unwrap_or_default()),
        ("Hometown", entry.hometown.clone().unwrap_or_default()),
        ("Weekend Plans", entry.weekend_plans.clone().unwrap_or_default()),
        ("Last Updated", entry.timestamp.format(TIME_FORMAT).to_string()),
    ];

    let body = html! {
        (home_link())
        div {
            @for (label, value) in &fields {
                div class="entry-field" {
                    div class="entry-label" { (label) }
                    ": "
                    (value)
                }
            }
        }
        a href=(format!("/edit/{}", entry.id)) { "Edit Entry" }
    };
    page_shell(&format!("View Entry {}", entry.id), body)
}

/// One user's entry history as a full page of entry cards.
pub fn user_entries_page(entries: &[Entry]) -> Markup {
    let body = html! {
        (home_link())
        div {
            @for stored in entries {
                (entry_card(stored))
            }
        }
    };
    page_shell("Previous Entries", body)
}

/// The global index: one "title by username" link per entry.
pub fn all_entries_page(listings: &[EntryListing]) -> Markup {
    let body = html! {
        (home_link())
        div {
            @for listing in listings {
                div class="entry-link" {
                    a href=(format!("/view_entry/{}", listing.id)) {
                        (listing.title) " by " (listing.username)
                    }
                }
            }
        }
    };
    page_shell("All Entries", body)
}

/// Uniform notice for an entry id with no corresponding row.
pub fn not_found_page(entry_id: i64) -> Markup {
    let body = html! {
        (home_link())
        p { "Entry " (entry_id) " not found." }
    };
    page_shell("Entry Not Found", body)
}

/// Transient confirmation fragment shown after a successful update.
///
/// Redirects back to the detail view after a short client-side delay.
pub fn update_confirmation(entry_id: i64) -> Markup {
    let saved_at = chrono::Local::now().format(TIME_FORMAT);
    html! {
        div {
            p { "Changes saved successfully at " (saved_at) }
            script {
                (PreEscaped(format!(
                    "setTimeout(function() {{ window.location.href = '/view_entry/{entry_id}'; }}, 2000);"
                )))
            }
        }
    }
}
