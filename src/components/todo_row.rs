//! Todo Row Component
//!
//! A single task in the list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{AsyncCallback, ListVariant};
use crate::view_model::{toggle_request, RowLabel, TodoRowView};

/// A single task row
#[component]
pub fn TodoRow(
    row: TodoRowView,
    variant: ListVariant,
    /// Toggle or delete in flight for this task
    #[prop(into)] pending: Signal<bool>,
    on_toggle: AsyncCallback<(String, bool)>,
    on_delete: AsyncCallback<String>,
) -> impl IntoView {
    let TodoRowView { todo, label } = row;
    let completed = todo.completed;
    let full = variant == ListVariant::Full;

    let toggle_args = toggle_request(&todo);
    let on_change = move |_| {
        spawn_local(on_toggle.run(toggle_args.clone()));
    };

    let id = todo.id.clone();
    let on_click_delete = move |_| {
        spawn_local(on_delete.run(id.clone()));
    };

    let label_view = label.map(|label| match label {
        RowLabel::Group(name) => view! {
            <span class="todo-label group">{name}</span>
        }.into_any(),
        RowLabel::Partner { name, avatar_url } => view! {
            <span class="todo-label partner">
                {avatar_url.filter(|_| full).map(|src| view! { <img class="partner-avatar" src=src alt="" /> })}
                {name}
            </span>
        }.into_any(),
    });

    let row_class = if completed { "todo-row completed" } else { "todo-row" };
    let created = full.then(|| todo.created_at.format("%b %-d, %Y").to_string());

    view! {
        <li class=row_class>
            <input
                type="checkbox"
                prop:checked=completed
                disabled=move || pending.get()
                on:change=on_change
            />

            <span class="todo-content">{todo.content.clone()}</span>

            {label_view}

            {completed.then(|| view! { <span class="todo-completed-marker">"Completed"</span> })}

            {created.map(|date| view! { <span class="todo-date">{date}</span> })}

            <button
                class="delete-btn"
                title="Delete task"
                disabled=move || pending.get()
                on:click=on_click_delete
            >
                "×"
            </button>
        </li>
    }
}
