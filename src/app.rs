//! Shared To-dos Frontend App
//!
//! Session loading, app-wide store and routes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::commands;
use crate::config::UiConfig;
use crate::context::AppContext;
use crate::pages::{HomePage, TodoPage};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new(UiConfig::load()));
    let ctx = AppContext::new(signal(0u32));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Reload the session whenever the backend reports sign-in/sign-out
    spawn_local(async move {
        if let Err(err) = commands::on_session_changed(move || ctx.reload_session()).await {
            tracing::error!(error = %err, "failed to subscribe to session changes");
        }
    });

    // Load session on mount and on every trigger
    Effect::new(move |_| {
        let trigger = ctx.session_trigger.get();
        spawn_local(async move {
            match commands::get_current_user().await {
                Ok(user) => {
                    tracing::info!(trigger, signed_in = user.is_some(), "session loaded");
                    *store.current_user().write() = user;
                }
                Err(err) => tracing::error!(error = %err, "get_current_user failed"),
            }
        });
    });

    // Groups only label tasks, so a failure leaves tasks unlabelled
    Effect::new(move |_| {
        let Some(user_id) = store.current_user().with(|user| user.as_ref().map(|user| user.id.clone())) else {
            store.groups().write().clear();
            return;
        };
        spawn_local(async move {
            match commands::get_groups(&user_id).await {
                Ok(groups) => *store.groups().write() = groups,
                Err(err) => tracing::warn!(error = %err, "get_groups failed"),
            }
        });
    });

    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/todos") view=TodoPage />
                    <Route path=path!("/todos/:partner_id") view=TodoPage />
                </Routes>
            </main>
        </Router>
    }
}
