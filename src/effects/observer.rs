use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::watch::{VisibilityEntry, VisibilitySource};

/// The elements one observer watches, keyed by their index in `elements`.
pub struct ObservedSet<'a> {
    observer: &'a IntersectionObserver,
    elements: &'a [Element],
}

impl VisibilitySource<usize> for ObservedSet<'_> {
    fn unwatch(&self, key: &usize) {
        if let Some(element) = self.elements.get(*key) {
            self.observer.unobserve(element);
        }
    }
}

impl ObservedSet<'_> {
    pub fn element(&self, key: usize) -> Option<&Element> {
        self.elements.get(key)
    }
}

/// Starts watching `elements`, handing every reported batch to `on_batch`
/// in the order the browser reported it. Lives for the rest of the page.
pub fn watch_elements<F>(
    elements: Rc<Vec<Element>>,
    threshold: f64,
    root_margin: Option<&str>,
    mut on_batch: F,
) -> Option<IntersectionObserver>
where
    F: FnMut(&[VisibilityEntry<usize>], &ObservedSet<'_>) + 'static,
{
    if elements.is_empty() {
        return None;
    }

    let watched = elements.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let batch: Vec<VisibilityEntry<usize>> = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target();
                    watched
                        .iter()
                        .position(|element| *element == target)
                        .map(|key| VisibilityEntry::new(key, entry.is_intersecting()))
                })
                .collect();
            let set = ObservedSet {
                observer: &observer,
                elements: &watched,
            };
            on_batch(&batch, &set);
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    for element in elements.iter() {
        observer.observe(element);
    }
    callback.forget();
    Some(observer)
}
