//! Listpad Frontend Entry Point

mod app;
mod components;
mod context;
mod models;
mod state;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
