//! Todo List View Component
//!
//! Form plus list of shared tasks. Holds no state besides the form draft;
//! every change goes out through the callbacks.

use leptos::prelude::*;

use crate::components::{AsyncCallback, ErrorBanner, NewTodoForm, TodoRow};
use crate::models::{Group, Partner, Todo};
use crate::store::PendingActions;
use crate::view_model::{build_rows, status_line, summary};

/// Display variant of the list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListVariant {
    /// Full page list with avatars and dates
    #[default]
    Full,
    /// Dense list for previews
    Compact,
}

impl ListVariant {
    fn class_name(self) -> &'static str {
        match self {
            ListVariant::Full => "todo-list-full",
            ListVariant::Compact => "todo-list-compact",
        }
    }
}

/// Shared to-do list
///
/// # Arguments
/// * `todos` - Tasks in display order; never re-sorted here
/// * `loading` - A load is in flight; rows and the draft stay mounted
/// * `pending_ids` - Tasks whose controls are disabled while a request is in flight
/// * `max_items` - Show only the first N tasks
#[component]
pub fn TodoListView(
    #[prop(into)] todos: Signal<Vec<Todo>>,
    #[prop(into)] partners: Signal<Vec<Partner>>,
    #[prop(optional)] groups: Option<Signal<Vec<Group>>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] creating: Signal<bool>,
    #[prop(into)] pending_ids: Signal<PendingActions>,
    #[prop(into)] error: Signal<Option<String>>,
    on_create: AsyncCallback<String>,
    on_toggle: AsyncCallback<(String, bool)>,
    on_delete: AsyncCallback<String>,
    #[prop(optional)] variant: ListVariant,
    #[prop(optional_no_strip)] max_items: Option<usize>,
    #[prop(default = true)] show_header: bool,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let rows = move || {
        let todos = todos.get();
        let partners = partners.get();
        let groups = groups.map(|groups| groups.get()).unwrap_or_default();
        build_rows(&todos, &partners, &groups, max_items)
    };

    let list_class = format!("todo-list {} {}", variant.class_name(), class).trim_end().to_string();

    view! {
        <div class=list_class>
            {show_header.then(|| view! {
                <header class="todo-list-header">
                    <h2>"Shared To-dos"</h2>
                    <p class="todo-summary">{move || summary(&todos.get())}</p>
                </header>
            })}

            <ErrorBanner error=error />

            <NewTodoForm creating=creating on_create=on_create />

            {move || {
                let loading = loading.get();
                let empty = todos.with(|todos| todos.is_empty());
                status_line(loading, empty).map(|line| {
                    let class = if loading { "loading" } else { "todo-empty" };
                    view! { <p class=class>{line}</p> }
                })
            }}

            <ul class="todo-items">
                <For
                    each=rows
                    key=|row| {
                        // Every field a row displays, so edits re-render the row
                        (
                            row.todo.id.clone(),
                            row.todo.content.clone(),
                            row.todo.completed,
                            row.label.clone(),
                        )
                    }
                    children=move |row| {
                        let id = row.todo.id.clone();
                        let pending = Signal::derive(move || pending_ids.with(|pending| pending.contains(&id)));
                        view! {
                            <TodoRow
                                row=row
                                variant=variant
                                pending=pending
                                on_toggle=on_toggle
                                on_delete=on_delete
                            />
                        }
                    }
                />
            </ul>
        </div>
    }
}
