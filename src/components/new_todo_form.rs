//! New Todo Form Component
//!
//! Input for adding a task. The draft is the only local state.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::AsyncCallback;
use crate::view_model::submitted_content;

/// Submit the draft: blank drafts are ignored, otherwise the trimmed text is
/// handed to `on_create` and the draft is cleared once it settles.
pub async fn submit_draft(draft: RwSignal<String>, on_create: AsyncCallback<String>) {
    let Some(content) = submitted_content(&draft.get_untracked()) else {
        return;
    };
    on_create.run(content).await;
    // Cleared even when the create failed
    draft.set(String::new());
}

#[component]
pub fn NewTodoForm(
    #[prop(into)] creating: Signal<bool>,
    on_create: AsyncCallback<String>,
    #[prop(into, default = "Add a shared task...".to_string())] placeholder: String,
) -> impl IntoView {
    let draft = RwSignal::new(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(submit_draft(draft, on_create));
    };

    view! {
        <form class="new-todo-form" on:submit=on_submit>
            <div class="new-todo-row">
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    disabled=move || creating.get()
                />
                <button type="submit" disabled=move || creating.get()>
                    {move || if creating.get() { "Adding..." } else { "Add" }}
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use futures::executor::block_on;
    use futures::future::FutureExt;

    use super::*;
    use crate::controller::TodoController;
    use crate::error::ApiError;
    use crate::store::CREATE_ERROR;
    use crate::test_support::{make_partner, FakeApi};

    fn recording_callback() -> (AsyncCallback<String>, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&seen);
        let callback = Callback::new(move |content: String| {
            recorder.lock().unwrap().push(content);
            async {}.boxed_local()
        });
        (callback, seen)
    }

    #[test]
    fn test_submit_passes_trimmed_content_and_clears() {
        let (on_create, seen) = recording_callback();
        let draft = RwSignal::new("  water the plants  ".to_string());

        block_on(submit_draft(draft, on_create));

        assert_eq!(*seen.lock().unwrap(), vec!["water the plants".to_string()]);
        assert_eq!(draft.get_untracked(), "");
    }

    #[test]
    fn test_blank_draft_invokes_nothing() {
        let (on_create, seen) = recording_callback();
        let draft = RwSignal::new(" \t\n ".to_string());

        block_on(submit_draft(draft, on_create));

        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(draft.get_untracked(), " \t\n ");
    }

    #[test]
    fn test_draft_cleared_after_failed_create() {
        let api = FakeApi::default();
        api.push_todos(Ok(vec![]));
        api.push_partners(Ok(vec![make_partner("p1")]));
        let controller = TodoController::new(api.clone());
        block_on(controller.load(Some("me".to_string()), Some("p1".to_string())));
        api.push_mutation(Err(ApiError::Invoke("offline".to_string())));

        let draft = RwSignal::new("buy milk".to_string());
        block_on(submit_draft(draft, controller.create_callback()));

        assert_eq!(draft.get_untracked(), "");
        let state = controller.state().get_untracked();
        assert_eq!(state.error.as_deref(), Some(CREATE_ERROR));
        assert!(state.todos.is_empty());
        assert!(!state.creating);
    }
}
