//! Session Commands
//!
//! Frontend bindings for the signed-in user.

use wasm_bindgen::prelude::*;

use super::{describe_rejection, invoke_command};
use crate::error::{ApiError, ApiResult};
use crate::models::User;

/// Emitted by the backend after sign-in or sign-out
pub const SESSION_CHANGED_EVENT: &str = "session-changed";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "event"])]
    async fn listen(event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> Result<JsValue, JsValue>;
}

/// Currently signed-in user, `None` when signed out
pub async fn get_current_user() -> ApiResult<Option<User>> {
    invoke_command("get_current_user", &()).await
}

/// Run `on_change` every time the backend reports a session change
pub async fn on_session_changed(on_change: impl Fn() + 'static) -> ApiResult<()> {
    let handler = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| on_change());
    listen(SESSION_CHANGED_EVENT, &handler)
        .await
        .map_err(|e| ApiError::Invoke(describe_rejection(&e)))?;
    // The listener stays registered for the lifetime of the page
    handler.forget();
    Ok(())
}
