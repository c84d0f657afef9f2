use log::info;
use site_enhance::{config, initialize, on_page_load};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, EventTarget};

/// Runs `f` once when `target` fires `event`.
fn once(target: &EventTarget, event: &str, f: fn()) {
    let callback = Closure::once_into_js(f);
    let _ = target.add_event_listener_with_callback(event, callback.unchecked_ref());
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting site enhancements");

    let Some(window) = window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    match document.ready_state().as_str() {
        "loading" => once(&document, "DOMContentLoaded", initialize),
        _ => initialize(),
    }

    match document.ready_state().as_str() {
        "complete" => on_page_load(),
        _ => once(&window, "load", on_page_load),
    }
}
