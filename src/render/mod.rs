//! HTML rendering for journal pages and fragments.
//!
//! Every builder here is a pure function of its input record: no state,
//! no I/O, no error conditions. All rendering uses
//! [maud](https://maud.lambda.xyz/) for compile-time HTML generation with
//! automatic XSS protection (all dynamic values are escaped).
//!
//! Fragments (the journal form, entry cards, the update confirmation) are
//! swapped into the page client-side by htmx; full pages wrap their body
//! in [`components::page_shell`].

pub mod components;
pub mod entry;
pub mod forms;
