//! Mobile navigation menu: toggle button, close on outside click, close
//! when a link inside the menu is followed.

use gloo::events::EventListener;
use web_sys::{Document, Element, Event, Node};

use crate::dom;

const HIDDEN_CLASS: &str = "hidden";

pub(crate) struct MobileMenu {
    _listeners: Vec<EventListener>,
}

impl MobileMenu {
    pub(crate) fn mount(document: &Document) -> Option<Self> {
        let button = dom::element_by_id(document, "menu-toggle")?;
        let panel = dom::element_by_id(document, "mobile-menu")?;

        let mut listeners = Vec::new();

        {
            let panel = panel.clone();
            listeners.push(EventListener::new(&button, "click", move |event: &Event| {
                event.stop_propagation();
                let _ = panel.class_list().toggle(HIDDEN_CLASS);
            }));
        }

        // Clicks that land outside both the panel and its button close an
        // open menu.
        {
            let panel = panel.clone();
            let button = button.clone();
            listeners.push(EventListener::new(document, "click", move |event: &Event| {
                if panel.class_list().contains(HIDDEN_CLASS) {
                    return;
                }
                let target = dom::event_target_element(event);
                let inside = |element: &Element| {
                    target
                        .as_ref()
                        .map(|t| {
                            let node: &Node = t;
                            element.contains(Some(node))
                        })
                        .unwrap_or(false)
                };
                if !inside(&panel) && !inside(&button) {
                    let _ = panel.class_list().add_1(HIDDEN_CLASS);
                }
            }));
        }

        for link in dom::query_all(document, "#mobile-menu a") {
            let panel = panel.clone();
            listeners.push(EventListener::new(&link, "click", move |_: &Event| {
                let _ = panel.class_list().add_1(HIDDEN_CLASS);
            }));
        }

        Some(Self {
            _listeners: listeners,
        })
    }
}
