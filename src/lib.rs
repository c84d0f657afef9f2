use log::info;

pub mod config;
pub mod countdown;
pub mod counter;
pub mod error;
pub mod events;
pub mod interactions;
pub mod reveal;
pub mod scroll;
pub mod watch;

pub mod components {
    pub mod countdown_pill;
}
pub mod effects {
    pub mod counters;
    pub mod dom;
    pub mod interactions;
    pub mod loader;
    pub mod observer;
    pub mod reveal;
    pub mod scroll;
}

use components::countdown_pill::mount_countdown;
use events::EventCatalog;

/// Binds everything that only needs the document structure. Call once,
/// after `DOMContentLoaded`.
pub fn initialize() {
    info!("Initializing site enhancements");

    mount_countdown(&EventCatalog::embedded());

    effects::scroll::bind_scroll_effects();
    effects::reveal::bind_reveal();
    effects::counters::bind_counters();
    effects::interactions::bind_anchor_scrolling();
    effects::interactions::bind_ripples();
    effects::interactions::bind_tilt();
    effects::interactions::bind_hover_transitions();
    effects::interactions::apply_floating();
}

/// Work that waits for the full page load.
pub fn on_page_load() {
    effects::loader::dismiss_loading_screen();
}
