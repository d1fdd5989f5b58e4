//! Small accessors over the browser environment. Every lookup degrades to
//! None so widgets can no-op when their markup is absent.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Window};

pub(crate) fn window() -> Option<Window> {
    web_sys::window()
}

pub(crate) fn document() -> Option<Document> {
    window()?.document()
}

pub(crate) fn element_by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

pub(crate) fn html_element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    element_by_id(document, id)?.dyn_into::<HtmlElement>().ok()
}

/// All elements matching the selector, skipping non-element nodes.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    let mut elements = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(element) = list.item(index).and_then(|node| node.dyn_into::<Element>().ok())
        {
            elements.push(element);
        }
    }
    elements
}

pub(crate) fn event_target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}
