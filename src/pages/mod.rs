//! Pages
//!
//! Route-level components and the wiring they share.

mod home_page;
mod todo_page;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::TauriApi;
use crate::components::{ListVariant, PartnerSelector, TodoListView};
use crate::controller::TodoController;
use crate::store::{use_app_store, AppStateStoreFields};

pub use home_page::HomePage;
pub use todo_page::TodoPage;

/// Controller for a page, reloaded whenever the signed-in user or the scope changes
pub fn use_todo_controller(scoped_partner_id: Signal<Option<String>>) -> TodoController<TauriApi> {
    let store = use_app_store();
    let controller = TodoController::new(TauriApi);

    let loader = controller.clone();
    Effect::new(move |_| {
        let user_id = store.current_user().with(|user| user.as_ref().map(|user| user.id.clone()));
        let partner_id = scoped_partner_id.get();
        let loader = loader.clone();
        spawn_local(async move {
            loader.load(user_id, partner_id).await;
        });
    });

    controller
}

/// List view and partner selector bound to one controller
#[component]
pub fn TodoPanel(
    controller: TodoController<TauriApi>,
    #[prop(optional)] variant: ListVariant,
    #[prop(optional)] max_items: Option<usize>,
    #[prop(default = true)] show_header: bool,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let store = use_app_store();
    let state = controller.state();

    let todos = Signal::derive(move || state.with(|state| state.visible_todos()));
    let partners = Signal::derive(move || state.with(|state| state.partners.clone()));
    let groups = Signal::derive(move || store.groups().get());
    let creating = Signal::derive(move || state.with(|state| state.creating));
    let pending_ids = Signal::derive(move || state.with(|state| state.pending.clone()));
    let error = Signal::derive(move || state.with(|state| state.error.clone()));
    let loading = Signal::derive(move || state.with(|state| state.loading));
    let selector_open = Signal::derive(move || state.with(|state| state.is_selector_open()));
    let staged_content = Signal::derive(move || state.with(|state| state.staged_content.clone()));

    let on_create = controller.create_callback();
    let on_toggle = controller.toggle_callback();
    let on_delete = controller.delete_callback();
    let on_select = controller.select_partner_callback();

    let on_cancel = {
        let controller = controller.clone();
        Callback::new(move |_: ()| controller.cancel_selector())
    };
    let on_add_partner = {
        let controller = controller.clone();
        Callback::new(move |_: ()| controller.leave_for_add_partner())
    };
    let add_partner_path = store.config().with_untracked(|config| config.add_partner_path.clone());

    view! {
        <TodoListView
            todos=todos
            partners=partners
            groups=groups
            loading=loading
            creating=creating
            pending_ids=pending_ids
            error=error
            on_create=on_create
            on_toggle=on_toggle
            on_delete=on_delete
            variant=variant
            max_items=max_items
            show_header=show_header
            class=class
        />

        <PartnerSelector
            open=selector_open
            partners=partners
            staged_content=staged_content
            creating=creating
            on_select=on_select
            on_cancel=on_cancel
            on_add_partner=on_add_partner
            add_partner_path=add_partner_path
        />
    }
}
