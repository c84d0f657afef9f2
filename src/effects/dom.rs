use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement};

pub fn document() -> Option<Document> {
    window()?.document()
}

/// Every element matching `selector`, in document order. Empty on a bad
/// selector or when there is no document.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_one(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn set_styles(element: &Element, pairs: &[(&str, &str)]) {
    for (property, value) in pairs {
        set_style(element, property, value);
    }
}
