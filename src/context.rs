//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the session from backend - read
    pub session_trigger: ReadSignal<u32>,
    /// Trigger to reload the session from backend - write
    set_session_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(session_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            session_trigger: session_trigger.0,
            set_session_trigger: session_trigger.1,
        }
    }

    /// Trigger a reload of the signed-in user
    pub fn reload_session(&self) {
        self.set_session_trigger.update(|v| *v += 1);
    }
}
