//! Test fixtures shared by unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::commands::TodoApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{DeleteOutcome, Partner, Todo, TodoMutation};

pub fn make_todo(id: &str, user_id: &str, partner_id: Option<&str>, completed: bool) -> Todo {
    Todo {
        id: id.to_string(),
        user_id: user_id.to_string(),
        partner_id: partner_id.map(str::to_string),
        group_id: None,
        content: format!("Task {}", id),
        completed,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
    }
}

pub fn make_partner(id: &str) -> Partner {
    Partner {
        id: id.to_string(),
        email: format!("{}@example.com", id),
        username: format!("user-{}", id),
        avatar_url: None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetTodos(String),
    GetPartners(String),
    Create { user_id: String, content: String, partner_id: String },
    Toggle(String, bool),
    Delete(String),
}

type Queue<T> = Arc<Mutex<VecDeque<ApiResult<T>>>>;

/// Backend fake answering from scripted queues and recording calls
#[derive(Clone, Default)]
pub struct FakeApi {
    calls: Arc<Mutex<Vec<Call>>>,
    todos: Queue<Vec<Todo>>,
    partners: Queue<Vec<Partner>>,
    mutations: Queue<TodoMutation>,
    deletes: Queue<DeleteOutcome>,
}

impl FakeApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn push_todos(&self, result: ApiResult<Vec<Todo>>) {
        self.todos.lock().unwrap().push_back(result);
    }

    pub fn push_partners(&self, result: ApiResult<Vec<Partner>>) {
        self.partners.lock().unwrap().push_back(result);
    }

    pub fn push_mutation(&self, result: ApiResult<TodoMutation>) {
        self.mutations.lock().unwrap().push_back(result);
    }

    pub fn push_delete(&self, result: ApiResult<DeleteOutcome>) {
        self.deletes.lock().unwrap().push_back(result);
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn next<T>(queue: &Queue<T>) -> ApiResult<T> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(ApiError::Invoke("no scripted response".to_string())))
}

#[async_trait(?Send)]
impl TodoApi for FakeApi {
    async fn get_todos(&self, user_id: &str) -> ApiResult<Vec<Todo>> {
        self.record(Call::GetTodos(user_id.to_string()));
        next(&self.todos)
    }

    async fn get_partners(&self, user_id: &str) -> ApiResult<Vec<Partner>> {
        self.record(Call::GetPartners(user_id.to_string()));
        next(&self.partners)
    }

    async fn create_todo(&self, user_id: &str, content: &str, partner_id: &str) -> ApiResult<TodoMutation> {
        self.record(Call::Create {
            user_id: user_id.to_string(),
            content: content.to_string(),
            partner_id: partner_id.to_string(),
        });
        next(&self.mutations)
    }

    async fn toggle_todo_completion(&self, todo_id: &str, completed: bool) -> ApiResult<TodoMutation> {
        self.record(Call::Toggle(todo_id.to_string(), completed));
        next(&self.mutations)
    }

    async fn delete_todo(&self, todo_id: &str) -> ApiResult<DeleteOutcome> {
        self.record(Call::Delete(todo_id.to_string()));
        next(&self.deletes)
    }
}
