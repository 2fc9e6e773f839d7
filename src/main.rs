#![allow(warnings)]
//! Reorderable List Frontend Entry Point

mod app;
mod components;
mod context;
mod dom_events;
mod driver;

use app::App;
use leptos::prelude::*;

/// Records kept in the rolling log buffer
const LOG_CAPACITY: usize = 256;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = rolling_logger::init_logger(LOG_CAPACITY, log::LevelFilter::Debug) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {}", err).into());
    }
    mount_to_body(App);
}
