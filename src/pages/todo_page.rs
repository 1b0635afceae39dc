//! To-do Page
//!
//! Full task list, optionally scoped to one partner through the route.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::NavBar;
use crate::pages::{use_todo_controller, TodoPanel};

#[component]
pub fn TodoPage() -> impl IntoView {
    let params = use_params_map();
    let scoped_partner_id = Signal::derive(move || params.with(|params| params.get("partner_id")));

    let controller = use_todo_controller(scoped_partner_id);
    let state = controller.state();

    let title = move || {
        let partner_name = scoped_partner_id.get().and_then(|partner_id| {
            state.with(|state| {
                state
                    .partners
                    .iter()
                    .find(|partner| partner.id == partner_id)
                    .map(|partner| partner.display_name().to_string())
            })
        });
        match partner_name {
            Some(name) => format!("To-dos with {}", name),
            None => "Shared To-dos".to_string(),
        }
    };

    view! {
        <section class="todo-page">
            <NavBar />
            <h1>{title}</h1>
            <TodoPanel controller=controller show_header=true />
        </section>
    }
}
