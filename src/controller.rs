//! To-do Page Controller
//!
//! Mediates between the list view and the backend: every create, toggle and
//! delete goes through here, and local state changes only after the backend
//! answers.

use futures::future::FutureExt;
use leptos::prelude::*;

use crate::commands::TodoApi;
use crate::components::AsyncCallback;
use crate::store::{CreatePlan, TodoPageState};

#[derive(Clone)]
pub struct TodoController<A> {
    api: A,
    state: RwSignal<TodoPageState>,
}

impl<A> TodoController<A>
where
    A: TodoApi + Clone + 'static,
{
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RwSignal::new(TodoPageState::new()),
        }
    }

    pub fn state(&self) -> RwSignal<TodoPageState> {
        self.state
    }

    /// Fetch tasks and partners for the user, both requests in flight at once
    pub async fn load(&self, user_id: Option<String>, scoped_partner_id: Option<String>) {
        let ticket = self
            .state
            .try_update(|state| state.begin_load(user_id, scoped_partner_id))
            .flatten();
        let Some(ticket) = ticket else {
            tracing::debug!("no signed-in user, skipping load");
            return;
        };

        tracing::info!(user_id = %ticket.user_id, generation = ticket.generation, "loading tasks and partners");
        let (todos, partners) = futures::join!(
            self.api.get_todos(&ticket.user_id),
            self.api.get_partners(&ticket.user_id)
        );
        self.state.update(|state| {
            state.finish_load(ticket.generation, todos, partners);
        });
    }

    pub async fn create(&self, content: String, target_partner_id: Option<String>) {
        let plan = self.state.try_update(|state| state.plan_create(content, target_partner_id));
        self.run_create(plan).await;
    }

    /// Partner picked in the selector; submits the staged content
    pub async fn select_partner(&self, partner_id: String) {
        let plan = self.state.try_update(|state| state.plan_select_partner(partner_id));
        self.run_create(plan).await;
    }

    async fn run_create(&self, plan: Option<CreatePlan>) {
        match plan {
            Some(CreatePlan::Submit(request)) => {
                tracing::info!(partner_id = %request.partner_id, "creating task");
                let result = self
                    .api
                    .create_todo(&request.user_id, &request.content, &request.partner_id)
                    .await;
                self.state.update(|state| state.finish_create(&request.user_id, result));
            }
            Some(CreatePlan::Staged) => {
                tracing::debug!("no partner in context, opening partner selector");
            }
            Some(CreatePlan::Skipped) | None => {}
        }
    }

    pub fn cancel_selector(&self) {
        self.state.update(|state| state.cancel_selector());
    }

    /// Close the selector before navigating to the add-partner screen
    pub fn leave_for_add_partner(&self) {
        tracing::debug!("leaving partner selector to add a partner");
        self.state.update(|state| state.cancel_selector());
    }

    pub async fn toggle(&self, todo_id: String, completed: bool) {
        self.state.update(|state| state.begin_action(&todo_id));
        let result = self.api.toggle_todo_completion(&todo_id, completed).await;
        self.state.update(|state| state.finish_toggle(&todo_id, result));
    }

    pub async fn delete(&self, todo_id: String) {
        self.state.update(|state| state.begin_action(&todo_id));
        let result = self.api.delete_todo(&todo_id).await;
        self.state.update(|state| state.finish_delete(&todo_id, result));
    }
}

// ========================
// Callbacks for the list view
// ========================

impl<A> TodoController<A>
where
    A: TodoApi + Clone + Send + Sync + 'static,
{
    pub fn create_callback(&self) -> AsyncCallback<String> {
        let controller = self.clone();
        Callback::new(move |content: String| {
            let controller = controller.clone();
            async move { controller.create(content, None).await }.boxed_local()
        })
    }

    pub fn toggle_callback(&self) -> AsyncCallback<(String, bool)> {
        let controller = self.clone();
        Callback::new(move |(todo_id, completed): (String, bool)| {
            let controller = controller.clone();
            async move { controller.toggle(todo_id, completed).await }.boxed_local()
        })
    }

    pub fn delete_callback(&self) -> AsyncCallback<String> {
        let controller = self.clone();
        Callback::new(move |todo_id: String| {
            let controller = controller.clone();
            async move { controller.delete(todo_id).await }.boxed_local()
        })
    }

    pub fn select_partner_callback(&self) -> AsyncCallback<String> {
        let controller = self.clone();
        Callback::new(move |partner_id: String| {
            let controller = controller.clone();
            async move { controller.select_partner(partner_id).await }.boxed_local()
        })
    }
}
