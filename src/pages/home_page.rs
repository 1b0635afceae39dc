//! Home Page
//!
//! Greeting and a compact preview of the user's tasks.

use leptos::prelude::*;

use crate::components::{ListVariant, NavBar};
use crate::pages::{use_todo_controller, TodoPanel};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_app_store();
    let controller = use_todo_controller(Signal::derive(|| None));
    let max_items = store.config().with_untracked(|config| config.dashboard_max_items);

    let greeting = move || {
        store.current_user().with(|user| match user {
            Some(user) => format!("Welcome back, {}", user.username.as_deref().unwrap_or(&user.email)),
            None => "Sign in to see your shared tasks".to_string(),
        })
    };

    view! {
        <section class="home-page">
            <NavBar />
            <h1>{greeting}</h1>
            <TodoPanel
                controller=controller
                variant=ListVariant::Compact
                max_items=max_items
                show_header=false
                class="home-preview"
            />
            <a class="view-all-link" href="/todos">"View all tasks"</a>
        </section>
    }
}
