//! Activities Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dispatcher;
mod loader;
mod logging;
mod models;
mod render;
mod router;
mod status;
mod store;
mod surface;
mod text;
mod web;

#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
