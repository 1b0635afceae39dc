//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod partner;
mod session;
mod todo;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;

use crate::error::{ApiError, ApiResult};
use crate::models::{DeleteOutcome, Partner, Todo, TodoMutation};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use partner::*;
pub use session::*;
pub use todo::*;

/// Invoke a backend command and decode its response
async fn invoke_command<A, R>(cmd: &str, args: &A) -> ApiResult<R>
where
    A: Serialize,
    R: DeserializeOwned,
{
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| ApiError::Encode(e.to_string()))?;
    let result = invoke(cmd, js_args)
        .await
        .map_err(|e| ApiError::Invoke(describe_rejection(&e)))?;
    serde_wasm_bindgen::from_value(result).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Readable form of a rejected promise value
fn describe_rejection(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| js_sys::JSON::stringify(value).ok().and_then(|s| s.as_string()))
        .unwrap_or_else(|| "unknown rejection".to_string())
}

/// Backend operations the to-do page depends on.
///
/// The page controller only talks to the backend through this trait.
#[async_trait(?Send)]
pub trait TodoApi {
    async fn get_todos(&self, user_id: &str) -> ApiResult<Vec<Todo>>;

    async fn get_partners(&self, user_id: &str) -> ApiResult<Vec<Partner>>;

    async fn create_todo(&self, user_id: &str, content: &str, partner_id: &str) -> ApiResult<TodoMutation>;

    async fn toggle_todo_completion(&self, todo_id: &str, completed: bool) -> ApiResult<TodoMutation>;

    async fn delete_todo(&self, todo_id: &str) -> ApiResult<DeleteOutcome>;
}

/// `TodoApi` over the Tauri IPC bridge
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriApi;

#[async_trait(?Send)]
impl TodoApi for TauriApi {
    async fn get_todos(&self, user_id: &str) -> ApiResult<Vec<Todo>> {
        todo::get_todos(user_id).await
    }

    async fn get_partners(&self, user_id: &str) -> ApiResult<Vec<Partner>> {
        partner::get_partners(user_id).await
    }

    async fn create_todo(&self, user_id: &str, content: &str, partner_id: &str) -> ApiResult<TodoMutation> {
        let args = CreateTodoArgs { user_id, content, partner_id };
        todo::create_todo(&args).await
    }

    async fn toggle_todo_completion(&self, todo_id: &str, completed: bool) -> ApiResult<TodoMutation> {
        todo::toggle_todo_completion(todo_id, completed).await
    }

    async fn delete_todo(&self, todo_id: &str) -> ApiResult<DeleteOutcome> {
        todo::delete_todo(todo_id).await
    }
}
