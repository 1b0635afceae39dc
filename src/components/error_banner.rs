//! Error Banner Component

use leptos::prelude::*;

/// Most recent error message, hidden when there is none
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! {
                <div class="error-banner" role="alert">
                    {message}
                </div>
            }
        })
    }
}
