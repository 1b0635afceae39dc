#![allow(warnings)]
//! Shared To-dos Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod models;
mod pages;
mod store;
mod view_model;

#[cfg(test)]
mod test_support;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting shared to-dos frontend");

    mount_to_body(App);
}
