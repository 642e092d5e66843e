//! Tasks Frontend Entry Point

mod models;
mod view_mode;
mod todos;
mod commands;
mod notify;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
