//! To-Do List Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod store;
mod view;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
