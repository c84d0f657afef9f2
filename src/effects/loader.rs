use gloo_timers::callback::Timeout;
use log::debug;

use super::dom::{by_id, set_style, set_styles};
use crate::config::{LOADER_FADE_MS, LOADER_HOLD_MS, LOADING_SCREEN_ID};

/// Holds the loading screen briefly, fades it out, then removes it from layout.
pub fn dismiss_loading_screen() {
    let Some(screen) = by_id(LOADING_SCREEN_ID) else {
        return;
    };
    debug!("Dismissing loading screen in {}ms", LOADER_HOLD_MS);

    Timeout::new(LOADER_HOLD_MS, move || {
        set_styles(
            &screen,
            &[
                ("transition", "opacity 0.8s ease, transform 0.8s ease"),
                ("opacity", "0"),
                ("transform", "scale(0.95)"),
            ],
        );
        Timeout::new(LOADER_FADE_MS, move || set_style(&screen, "display", "none")).forget();
    })
    .forget();
}
