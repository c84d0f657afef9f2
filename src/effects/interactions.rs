use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::dom::{document, query_all, query_one, set_style};
use crate::config::{
    ANCHOR_SELECTOR, BUTTON_SELECTOR, FLOAT_SELECTOR, HOVER_SELECTOR, RIPPLE_LIFETIME_MS,
    TILT_SELECTOR,
};
use crate::interactions::{
    float_style, is_in_page_anchor, PointerInBox, Ripple, Tilt, HOVER_TRANSITION, RIPPLE_CLASS,
    TILT_REST_TRANSFORM,
};

fn pointer_in(element: &Element, event: &MouseEvent) -> PointerInBox {
    let rect = element.get_bounding_client_rect();
    PointerInBox::new(
        event.client_x() as f64,
        event.client_y() as f64,
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
    )
}

fn listen<F>(element: &Element, event: &str, handler: F)
where
    F: FnMut(MouseEvent) + 'static,
{
    let callback = Closure::<dyn FnMut(MouseEvent)>::new(handler);
    if element
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .is_ok()
    {
        callback.forget();
    }
}

pub fn bind_ripples() {
    for button in query_all(BUTTON_SELECTOR) {
        let target = button.clone();
        listen(&button, "click", move |e| {
            let Some(doc) = document() else {
                return;
            };
            let Ok(ripple) = doc.create_element("span") else {
                return;
            };
            let geometry = Ripple::from_pointer(pointer_in(&target, &e));
            let size = format!("{}px", geometry.size);
            set_style(&ripple, "width", &size);
            set_style(&ripple, "height", &size);
            set_style(&ripple, "left", &format!("{}px", geometry.left));
            set_style(&ripple, "top", &format!("{}px", geometry.top));
            let _ = ripple.class_list().add_1(RIPPLE_CLASS);

            if target.append_child(&ripple).is_ok() {
                Timeout::new(RIPPLE_LIFETIME_MS, move || ripple.remove()).forget();
            }
        });
    }
}

pub fn bind_tilt() {
    for card in query_all(TILT_SELECTOR) {
        let target = card.clone();
        listen(&card, "mousemove", move |e| {
            let tilt = Tilt::from_pointer(pointer_in(&target, &e));
            set_style(&target, "transform", &tilt.transform());
        });

        let target = card.clone();
        listen(&card, "mouseleave", move |_| {
            set_style(&target, "transform", TILT_REST_TRANSFORM);
        });
    }
}

pub fn bind_hover_transitions() {
    for element in query_all(HOVER_SELECTOR) {
        let target = element.clone();
        listen(&element, "mouseenter", move |_| {
            set_style(&target, "transition", HOVER_TRANSITION);
        });
    }
}

pub fn apply_floating() {
    for (index, element) in query_all(FLOAT_SELECTOR).iter().enumerate() {
        let (animation, delay) = float_style(index);
        set_style(element, "animation", animation);
        set_style(element, "animation-delay", &delay);
    }
}

/// Smooth scrolling for links to sections of the same page.
pub fn bind_anchor_scrolling() {
    let anchors = query_all(ANCHOR_SELECTOR);
    let count = anchors.len();
    for anchor in anchors {
        let link = anchor.clone();
        listen(&anchor, "click", move |e| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            if !is_in_page_anchor(&href) {
                return;
            }
            // Only cancel the jump when there is somewhere to scroll to.
            if let Some(section) = query_one(&href) {
                e.prevent_default();
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
    }
    if count > 0 {
        info!("Smooth scrolling bound to {} anchors", count);
    }
}
