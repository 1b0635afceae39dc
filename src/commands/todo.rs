//! Todo Commands
//!
//! Frontend bindings for task-related backend commands.

use serde::Serialize;

use super::invoke_command;
use crate::error::ApiResult;
use crate::models::{DeleteOutcome, Todo, TodoMutation};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateTodoArgs<'a> {
    #[serde(rename = "userId")]
    pub user_id: &'a str,
    pub content: &'a str,
    #[serde(rename = "partnerId")]
    pub partner_id: &'a str,
}

#[derive(Serialize)]
struct UserIdArgs<'a> {
    #[serde(rename = "userId")]
    user_id: &'a str,
}

#[derive(Serialize)]
struct TodoIdArgs<'a> {
    #[serde(rename = "todoId")]
    todo_id: &'a str,
}

#[derive(Serialize)]
struct ToggleTodoArgs<'a> {
    #[serde(rename = "todoId")]
    todo_id: &'a str,
    completed: bool,
}

// ========================
// Commands
// ========================

pub async fn get_todos(user_id: &str) -> ApiResult<Vec<Todo>> {
    invoke_command("get_todos", &UserIdArgs { user_id }).await
}

pub async fn create_todo(args: &CreateTodoArgs<'_>) -> ApiResult<TodoMutation> {
    invoke_command("create_todo", args).await
}

pub async fn toggle_todo_completion(todo_id: &str, completed: bool) -> ApiResult<TodoMutation> {
    invoke_command("toggle_todo_completion", &ToggleTodoArgs { todo_id, completed }).await
}

pub async fn delete_todo(todo_id: &str) -> ApiResult<DeleteOutcome> {
    invoke_command("delete_todo", &TodoIdArgs { todo_id }).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_use_camel_case_keys() {
        let args = CreateTodoArgs { user_id: "u1", content: "Plan trip", partner_id: "p2" };
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json, serde_json::json!({ "userId": "u1", "content": "Plan trip", "partnerId": "p2" }));

        let json = serde_json::to_value(ToggleTodoArgs { todo_id: "t9", completed: true }).unwrap();
        assert_eq!(json, serde_json::json!({ "todoId": "t9", "completed": true }));
    }
}
