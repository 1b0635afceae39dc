//! Application State
//!
//! `AppState` is the app-wide store (Leptos reactive_stores, field-level
//! reactivity). `TodoPageState` is the state of one to-do page, kept in a
//! signal and changed only through the transitions below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::UiConfig;
use crate::error::ApiResult;
use crate::models::{DeleteOutcome, Group, Partner, Todo, TodoMutation, User};
use crate::view_model::scoped_todos;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in user, `None` until the session is loaded or when signed out
    pub current_user: Option<User>,
    /// Groups used to label shared tasks
    pub groups: Vec<Group>,
    pub config: UiConfig,
}

impl AppState {
    pub fn new(config: UiConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// To-do Page State
// ========================

pub const LOAD_ERROR: &str = "Failed to load your tasks. Please try again.";
pub const CREATE_ERROR: &str = "Failed to create task.";
pub const TOGGLE_ERROR: &str = "Failed to update task.";
pub const DELETE_ERROR: &str = "Failed to delete task.";
pub const SIGNED_OUT_ERROR: &str = "You need to be signed in to add tasks.";

/// Ids of tasks with a toggle or delete request in flight
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingActions(Vec<String>);

impl PendingActions {
    /// Returns false if the id was already pending
    pub fn insert(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.0.push(id.to_string());
        true
    }

    pub fn remove(&mut self, id: &str) {
        self.0.retain(|pending| pending != id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|pending| pending == id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectorState {
    #[default]
    Closed,
    Open,
}

/// A load started by `begin_load`; results are accepted only for the latest one
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub user_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateRequest {
    pub user_id: String,
    pub content: String,
    pub partner_id: String,
}

/// What a create request turns into
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreatePlan {
    /// Call the backend
    Submit(CreateRequest),
    /// No partner known yet, content staged and selector opened
    Staged,
    /// Nothing to do
    Skipped,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TodoPageState {
    pub user_id: Option<String>,
    /// Partner id from the route, scopes the displayed list
    pub scoped_partner_id: Option<String>,
    pub todos: Vec<Todo>,
    pub partners: Vec<Partner>,
    pub loading: bool,
    pub creating: bool,
    pub pending: PendingActions,
    /// Most recent load or action error
    pub error: Option<String>,
    pub selector: SelectorState,
    /// Content waiting for a partner to be picked
    pub staged_content: Option<String>,
    load_generation: u64,
}

impl Default for TodoPageState {
    fn default() -> Self {
        Self {
            user_id: None,
            scoped_partner_id: None,
            todos: Vec::new(),
            partners: Vec::new(),
            loading: true,
            creating: false,
            pending: PendingActions::default(),
            error: None,
            selector: SelectorState::Closed,
            staged_content: None,
            load_generation: 0,
        }
    }
}

impl TodoPageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selector_open(&self) -> bool {
        self.selector == SelectorState::Open
    }

    /// Tasks shown on the page, narrowed to the scoped partner if any
    pub fn visible_todos(&self) -> Vec<Todo> {
        scoped_todos(&self.todos, self.scoped_partner_id.as_deref())
    }

    // ---- Load ----

    /// Record the user/route scope and start a load.
    ///
    /// Returns `None` when no user is signed in; lists are emptied and
    /// loading ends immediately.
    pub fn begin_load(&mut self, user_id: Option<String>, scoped_partner_id: Option<String>) -> Option<LoadTicket> {
        if user_id != self.user_id {
            // Staged content belongs to the previous session
            self.cancel_selector();
        }
        self.load_generation += 1;
        self.user_id = user_id.clone();
        self.scoped_partner_id = scoped_partner_id;
        self.error = None;

        match user_id {
            Some(user_id) => {
                self.loading = true;
                Some(LoadTicket { generation: self.load_generation, user_id })
            }
            None => {
                self.todos.clear();
                self.partners.clear();
                self.loading = false;
                None
            }
        }
    }

    /// Apply the joined fetch results. Returns false for a superseded load.
    pub fn finish_load(
        &mut self,
        generation: u64,
        todos: ApiResult<Vec<Todo>>,
        partners: ApiResult<Vec<Partner>>,
    ) -> bool {
        if generation != self.load_generation {
            tracing::debug!(generation, current = self.load_generation, "dropping stale load result");
            return false;
        }

        let mut failed = false;
        match todos {
            Ok(todos) => self.todos = todos,
            Err(err) => {
                tracing::error!(error = %err, "get_todos failed");
                failed = true;
            }
        }
        match partners {
            Ok(partners) => self.partners = partners,
            Err(err) => {
                tracing::error!(error = %err, "get_partners failed");
                failed = true;
            }
        }
        if failed {
            self.error = Some(LOAD_ERROR.to_string());
        }
        self.loading = false;
        true
    }

    // ---- Create ----

    /// Decide how to handle a create request.
    ///
    /// The partner is the explicit target, else the route-scoped partner.
    pub fn plan_create(&mut self, content: String, target_partner_id: Option<String>) -> CreatePlan {
        self.error = None;

        let Some(user_id) = self.user_id.clone() else {
            tracing::warn!("create requested without a signed-in user");
            self.error = Some(SIGNED_OUT_ERROR.to_string());
            return CreatePlan::Skipped;
        };

        match target_partner_id.or_else(|| self.scoped_partner_id.clone()) {
            Some(partner_id) => {
                self.creating = true;
                CreatePlan::Submit(CreateRequest { user_id, content, partner_id })
            }
            None => {
                self.staged_content = Some(content);
                self.selector = SelectorState::Open;
                CreatePlan::Staged
            }
        }
    }

    /// Retry the staged create with the partner picked in the selector
    pub fn plan_select_partner(&mut self, partner_id: String) -> CreatePlan {
        match self.staged_content.clone() {
            Some(content) => self.plan_create(content, Some(partner_id)),
            None => CreatePlan::Skipped,
        }
    }

    /// Apply a create result for `user_id`. A result for a user who is no
    /// longer signed in is dropped.
    pub fn finish_create(&mut self, user_id: &str, result: ApiResult<TodoMutation>) {
        self.creating = false;
        if self.user_id.as_deref() != Some(user_id) {
            tracing::debug!(user_id, "dropping create result for a previous session");
            return;
        }

        match result {
            Ok(TodoMutation { todo: Some(todo), error: None }) => {
                self.todos.push(todo);
                self.selector = SelectorState::Closed;
                self.staged_content = None;
            }
            Ok(TodoMutation { error: Some(message), .. }) => {
                tracing::error!(error = %message, "create_todo rejected");
                self.error = Some(message);
            }
            Ok(TodoMutation { todo: None, error: None }) => {
                tracing::error!("create_todo returned no task");
                self.error = Some(CREATE_ERROR.to_string());
            }
            Err(err) => {
                tracing::error!(error = %err, "create_todo failed");
                self.error = Some(CREATE_ERROR.to_string());
            }
        }
    }

    pub fn cancel_selector(&mut self) {
        self.selector = SelectorState::Closed;
        self.staged_content = None;
    }

    // ---- Toggle / Delete ----

    /// Mark a row busy before its request goes out
    pub fn begin_action(&mut self, todo_id: &str) {
        self.error = None;
        self.pending.insert(todo_id);
    }

    pub fn finish_toggle(&mut self, todo_id: &str, result: ApiResult<TodoMutation>) {
        match result {
            Ok(TodoMutation { todo: Some(updated), error: None }) => {
                if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == updated.id) {
                    *todo = updated;
                }
            }
            Ok(TodoMutation { error, .. }) => {
                tracing::error!(todo_id, error = ?error, "toggle_todo_completion rejected");
                self.error = Some(error.unwrap_or_else(|| TOGGLE_ERROR.to_string()));
            }
            Err(err) => {
                tracing::error!(todo_id, error = %err, "toggle_todo_completion failed");
                self.error = Some(TOGGLE_ERROR.to_string());
            }
        }
        self.pending.remove(todo_id);
    }

    pub fn finish_delete(&mut self, todo_id: &str, result: ApiResult<DeleteOutcome>) {
        match result {
            Ok(DeleteOutcome { success: true, .. }) => {
                self.todos.retain(|todo| todo.id != todo_id);
            }
            Ok(DeleteOutcome { error, .. }) => {
                tracing::error!(todo_id, error = ?error, "delete_todo rejected");
                self.error = Some(error.unwrap_or_else(|| DELETE_ERROR.to_string()));
            }
            Err(err) => {
                tracing::error!(todo_id, error = %err, "delete_todo failed");
                self.error = Some(DELETE_ERROR.to_string());
            }
        }
        self.pending.remove(todo_id);
    }
}
