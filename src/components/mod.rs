//! UI Components
//!
//! Reusable Leptos components.

mod error_banner;
mod nav_bar;
mod new_todo_form;
mod partner_selector;
mod todo_list;
mod todo_row;

use futures::future::LocalBoxFuture;
use leptos::prelude::*;

pub use error_banner::ErrorBanner;
pub use nav_bar::NavBar;
pub use new_todo_form::NewTodoForm;
pub use partner_selector::PartnerSelector;
pub use todo_list::{ListVariant, TodoListView};
pub use todo_row::TodoRow;

/// Callback whose work finishes when the returned future resolves
pub type AsyncCallback<T> = Callback<T, LocalBoxFuture<'static, ()>>;
