use log::{info, warn};
use stylist::Style;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element};

use super::dom::{by_id, query_one, set_style};
use crate::config::{HERO_SELECTOR, NAV_SELECTOR, PROGRESS_BAR_ID};
use crate::scroll::{NavbarChrome, Parallax, ScrollMetrics};

const PROGRESS_BAR_CSS: &str = r#"
    position: fixed;
    top: 0;
    left: 0;
    width: 0%;
    height: 3px;
    background: linear-gradient(90deg, #3b82f6, #2563eb);
    z-index: 9999;
    transition: width 0.1s ease;
    box-shadow: 0 2px 10px rgba(59, 130, 246, 0.5);
"#;

/// Progress bar, hero parallax and navbar chrome, all driven by one scroll
/// listener.
pub fn bind_scroll_effects() {
    let Some(window) = window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let navbar = query_one(NAV_SELECTOR);
    let progress_class = match Style::new(PROGRESS_BAR_CSS) {
        Ok(style) => Some(style.get_class_name().to_string()),
        Err(e) => {
            warn!("Progress bar style rejected: {}", e);
            None
        }
    };

    let scroll_window = window.clone();
    let scroll_callback = Closure::<dyn FnMut()>::new(move || {
        let Some(metrics) = read_metrics(&scroll_window, &document) else {
            return;
        };

        if let Some(navbar) = &navbar {
            let chrome = NavbarChrome::at(metrics.offset);
            set_style(navbar, "box-shadow", chrome.box_shadow());
            set_style(navbar, "backdrop-filter", chrome.backdrop_filter());
        }

        if let Some(hero) = query_one(HERO_SELECTOR) {
            let parallax = Parallax::at(metrics.offset);
            set_style(&hero, "transform", &parallax.transform());
            set_style(&hero, "opacity", &parallax.opacity.to_string());
        }

        if let Some(bar) = progress_bar(&document, progress_class.as_deref()) {
            set_style(&bar, "width", &format!("{}%", metrics.progress_percent()));
        }
    });

    if window
        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
        .is_ok()
    {
        scroll_callback.forget();
        info!("Scroll effects bound");
    }
}

fn read_metrics(window: &web_sys::Window, document: &Document) -> Option<ScrollMetrics> {
    let root = document.document_element()?;
    let body_offset = document.body().map_or(0, |body| body.scroll_top());
    let offset = if body_offset != 0 {
        body_offset as f64
    } else {
        window.scroll_y().unwrap_or(root.scroll_top() as f64)
    };
    Some(ScrollMetrics {
        offset,
        scroll_height: root.scroll_height() as f64,
        client_height: root.client_height() as f64,
    })
}

/// The progress bar, created on first use.
fn progress_bar(document: &Document, class: Option<&str>) -> Option<Element> {
    if let Some(bar) = by_id(PROGRESS_BAR_ID) {
        return Some(bar);
    }
    let bar = document.create_element("div").ok()?;
    bar.set_id(PROGRESS_BAR_ID);
    if let Some(class) = class {
        bar.set_class_name(class);
    }
    document.body()?.append_child(&bar).ok()?;
    Some(bar)
}
