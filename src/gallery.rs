//! Filterable card grid: category pills, live text search, perspective
//! tilt under the pointer, and whole-card click-through to the card's
//! page link.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, MouseEvent};

use tsukikage_core::filter::{card_visible, query_from_controls, FilterQuery};
use tsukikage_core::tilt;

use crate::dom;

const ACTIVE_CLASS: &str = "is-active";
const HIDDEN_CLASS: &str = "is-hidden";
const SHOW_ANIMATION: &str = "fadeIn 0.4s ease forwards";

pub(crate) struct CardGallery {
    _listeners: Vec<EventListener>,
}

impl CardGallery {
    pub(crate) fn mount(document: &Document) -> Option<Self> {
        let cards = dom::query_all(document, ".portfolio-card");
        if cards.is_empty() {
            return None;
        }

        let mut listeners = Vec::new();

        for pill in dom::query_all(document, "#card-filters .filter-pill") {
            let document = document.clone();
            let pill_for_click = pill.clone();
            listeners.push(EventListener::new(&pill, "click", move |_: &Event| {
                for other in dom::query_all(&document, "#card-filters .filter-pill") {
                    let _ = other.class_list().remove_1(ACTIVE_CLASS);
                }
                let _ = pill_for_click.class_list().add_1(ACTIVE_CLASS);
                apply_filters(&document);
            }));
        }

        if let Some(search) = dom::element_by_id(document, "card-search") {
            let document = document.clone();
            listeners.push(EventListener::new(&search, "input", move |_: &Event| {
                apply_filters(&document);
            }));
        }

        for card in &cards {
            if let Ok(card) = card.clone().dyn_into::<HtmlElement>() {
                bind_card(&card, &mut listeners);
            }
        }

        // Initial pass so cards honor whatever the controls already say.
        apply_filters(document);

        Some(Self {
            _listeners: listeners,
        })
    }
}

/// Re-reads the controls and re-evaluates every card. State lives in the
/// DOM; nothing is cached between evaluations.
fn apply_filters(document: &Document) {
    let query = read_query(document);
    for card in dom::query_all(document, ".portfolio-card") {
        let category = card.get_attribute("data-category").unwrap_or_default();
        let text = card_text(&card);
        let Ok(card) = card.dyn_into::<HtmlElement>() else {
            continue;
        };
        if card_visible(&category, &text, &query) {
            let _ = card.class_list().remove_1(HIDDEN_CLASS);
            let _ = card.style().set_property("animation", SHOW_ANIMATION);
        } else {
            let _ = card.class_list().add_1(HIDDEN_CLASS);
        }
    }
}

fn read_query(document: &Document) -> FilterQuery {
    let active = document
        .query_selector("#card-filters .filter-pill.is-active")
        .ok()
        .flatten()
        .and_then(|pill| pill.get_attribute("data-filter"));
    let search = dom::element_by_id(document, "card-search")
        .and_then(|input| input.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value());
    query_from_controls(active.as_deref(), search.as_deref())
}

/// Searchable text: title and excerpt children, missing ones contribute
/// nothing.
fn card_text(card: &Element) -> String {
    let part = |selector: &str| {
        card.query_selector(selector)
            .ok()
            .flatten()
            .and_then(|element| element.text_content())
            .unwrap_or_default()
    };
    format!("{} {}", part(".card-title"), part(".card-excerpt"))
}

fn bind_card(card: &HtmlElement, listeners: &mut Vec<EventListener>) {
    {
        let card_for_move = card.clone();
        listeners.push(EventListener::new(card, "mousemove", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = card_for_move.get_bounding_client_rect();
            let x = f64::from(event.client_x()) - rect.left();
            let y = f64::from(event.client_y()) - rect.top();
            let transform = tilt::tilt_transform(x, y, rect.width(), rect.height());
            let _ = card_for_move.style().set_property("transform", &transform);
        }));
    }

    {
        let card_for_leave = card.clone();
        listeners.push(EventListener::new(card, "mouseleave", move |_: &Event| {
            let _ = card_for_leave
                .style()
                .set_property("transform", &tilt::flat_transform());
        }));
    }

    // The whole card forwards to its page link, unless the click already
    // landed on a button of its own.
    {
        let card_for_click = card.clone();
        listeners.push(EventListener::new(card, "click", move |event: &Event| {
            let Some(target) = dom::event_target_element(event) else {
                return;
            };
            if matches!(target.closest(".button"), Ok(Some(_))) {
                return;
            }
            let Ok(Some(link)) = card_for_click.query_selector("a.page-link") else {
                return;
            };
            if let Ok(link) = link.dyn_into::<HtmlElement>() {
                link.click();
            }
        }));
    }
}
