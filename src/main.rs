#![allow(warnings)]
//! Interface Generator Frontend Entry Point

mod api;
mod app;
mod certificate;
mod components;
mod config;
mod context;
mod error;
mod export;
mod models;
mod notify;
mod store;
mod view_model;
mod workflow;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&format!("[APP] API base {}", config::ApiConfig::load().base_url()).into());
    mount_to_body(App);
}
