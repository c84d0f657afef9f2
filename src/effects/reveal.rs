use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};

use super::dom::{query_all, set_styles};
use super::observer::watch_elements;
use crate::config::{
    REVEAL_CLASS, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_STAGGER_MS, REVEAL_THRESHOLD,
};
use crate::reveal::{RevealTracker, HIDDEN_STYLE, SHOWN_STYLE};

/// Hides every reveal candidate and fades each one in, once, the first
/// time it scrolls into view.
pub fn bind_reveal() {
    let elements = query_all(REVEAL_SELECTOR);
    if elements.is_empty() {
        return;
    }

    let mut tracker = RevealTracker::new(REVEAL_STAGGER_MS);
    for (key, element) in elements.iter().enumerate() {
        set_styles(element, &HIDDEN_STYLE);
        tracker.register(key);
    }
    let tracker = Rc::new(RefCell::new(tracker));
    let count = elements.len();

    let observer = watch_elements(
        Rc::new(elements),
        REVEAL_THRESHOLD,
        Some(REVEAL_ROOT_MARGIN),
        move |batch, set| {
            let scheduled = tracker.borrow_mut().on_batch(batch, set);
            for reveal in scheduled {
                let Some(element) = set.element(reveal.key).cloned() else {
                    continue;
                };
                debug!("Revealing element {} in {}ms", reveal.key, reveal.delay_ms);
                Timeout::new(reveal.delay_ms, move || {
                    set_styles(&element, &SHOWN_STYLE);
                    let _ = element.class_list().add_1(REVEAL_CLASS);
                })
                .forget();
            }
        },
    );

    if observer.is_some() {
        info!("Watching {} elements for reveal", count);
    }
}
