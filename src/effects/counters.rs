use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use super::dom::query_all;
use super::observer::watch_elements;
use crate::config::{
    COUNTED_CLASS, COUNTER_DURATION_MS, COUNTER_FRAME_MS, COUNTER_SELECTOR, COUNTER_THRESHOLD,
};
use crate::counter::{parse_target, CounterAnimation, CounterTracker};

/// Counts each stat element up from zero the first time half of it is visible.
pub fn bind_counters() {
    let elements = query_all(COUNTER_SELECTOR);
    if elements.is_empty() {
        return;
    }

    let mut tracker = CounterTracker::new();
    for key in 0..elements.len() {
        tracker.register(key);
    }
    let tracker = Rc::new(RefCell::new(tracker));
    let count = elements.len();

    let observer = watch_elements(Rc::new(elements), COUNTER_THRESHOLD, None, move |batch, set| {
        let started = tracker.borrow_mut().on_batch(batch, set);
        for key in started {
            if let Some(element) = set.element(key).cloned() {
                start_counter(element);
            }
        }
    });

    if observer.is_some() {
        info!("Watching {} counters", count);
    }
}

fn start_counter(element: Element) {
    let target = parse_target(&element.text_content().unwrap_or_default());
    let _ = element.class_list().add_1(COUNTED_CLASS);
    debug!("Counting up to {}", target);

    spawn_local(async move {
        let mut animation = CounterAnimation::new(target, COUNTER_DURATION_MS, COUNTER_FRAME_MS);
        loop {
            TimeoutFuture::new(COUNTER_FRAME_MS).await;
            let frame = animation.step();
            element.set_text_content(Some(&frame.value.to_string()));
            if frame.done {
                break;
            }
        }
    });
}
