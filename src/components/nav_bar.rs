//! Navigation Bar Component
//!
//! Links to the to-do screens and the neighbouring features of the app.

use leptos::prelude::*;

/// (path, label)
const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/todos", "To-dos"),
    ("/calendar", "Calendar"),
    ("/notes", "Notes"),
    ("/shopping", "Shopping"),
    ("/partners", "Partners"),
    ("/settings", "Settings"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            {NAV_LINKS.iter().map(|(href, label)| view! {
                <a class="nav-link" href=*href>{*label}</a>
            }).collect_view()}
        </nav>
    }
}
