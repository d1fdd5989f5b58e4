//! Before/after comparison slider. All position math and drag state live
//! in `tsukikage_core::slider`; this widget binds them to the DOM.
//!
//! Document-level move/release listeners are owned by the widget, so a
//! remount (the host page being shown again) drops the previous set
//! before attaching fresh ones.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, KeyboardEvent, MouseEvent, Node, Touch, TouchEvent,
};

use tsukikage_core::slider::{
    clip_inset, left_percent, position_from_offset, SliderState, KEY_STEP,
};

use crate::dom;

pub(crate) struct CompareSlider {
    _listeners: Vec<EventListener>,
}

struct SliderDom {
    container: HtmlElement,
    handle: HtmlElement,
    line: HtmlElement,
    before: HtmlElement,
}

impl SliderDom {
    fn apply(&self, position: f64) {
        let left = left_percent(position);
        let _ = self.handle.style().set_property("left", &left);
        let _ = self.line.style().set_property("left", &left);
        let _ = self
            .before
            .style()
            .set_property("clip-path", &clip_inset(position));
    }

    /// Pointer-downs inside the container only move the position when they
    /// land on the container itself, the before image, or an image pane.
    fn is_surface(&self, target: &Element) -> bool {
        let node: &Node = target;
        self.container.is_same_node(Some(node))
            || self.before.is_same_node(Some(node))
            || target.class_list().contains("image")
    }

    fn position_at(&self, client_x: f64) -> Option<f64> {
        let rect = self.container.get_bounding_client_rect();
        position_from_offset(client_x, rect.left(), rect.width())
    }
}

fn non_passive() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    }
}

impl CompareSlider {
    /// Binds the slider, resetting it to the centered position. A page
    /// without the slider markup is normal; mounting just no-ops.
    pub(crate) fn mount(document: &Document) -> Option<Self> {
        let container = dom::html_element_by_id(document, "slider-container");
        let handle = dom::html_element_by_id(document, "slider-handle");
        let line = dom::html_element_by_id(document, "slider-line");
        let before = dom::html_element_by_id(document, "before-image");
        let (Some(container), Some(handle), Some(line), Some(before)) =
            (container, handle, line, before)
        else {
            console::log!("slider: elements not found, skipping init");
            return None;
        };

        let slider = Rc::new(SliderDom {
            container,
            handle,
            line,
            before,
        });
        let state = Rc::new(RefCell::new(SliderState::default()));
        slider.apply(state.borrow().position);

        let mut listeners = Vec::new();

        // Dragging starts on the handle only; a plain container press just
        // jumps the position.
        {
            let state = Rc::clone(&state);
            listeners.push(EventListener::new_with_options(
                &slider.handle,
                "mousedown",
                non_passive(),
                move |event: &Event| {
                    state.borrow_mut().begin_drag();
                    event.prevent_default();
                },
            ));
        }

        {
            let container = slider.container.clone();
            let state = Rc::clone(&state);
            let slider = Rc::clone(&slider);
            listeners.push(EventListener::new(
                &container,
                "mousedown",
                move |event: &Event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let Some(target) = dom::event_target_element(event) else {
                        return;
                    };
                    if !slider.is_surface(&target) {
                        return;
                    }
                    if let Some(position) = slider.position_at(f64::from(event.client_x())) {
                        slider.apply(state.borrow_mut().set_position(position));
                    }
                },
            ));
        }

        // Move and release bind to the document so drags that wander
        // outside the container keep tracking.
        {
            let state = Rc::clone(&state);
            let slider = Rc::clone(&slider);
            listeners.push(EventListener::new(
                document,
                "mousemove",
                move |event: &Event| {
                    if !state.borrow().dragging {
                        return;
                    }
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    if let Some(position) = slider.position_at(f64::from(event.client_x())) {
                        slider.apply(state.borrow_mut().set_position(position));
                    }
                },
            ));
        }

        {
            let state = Rc::clone(&state);
            listeners.push(EventListener::new(document, "mouseup", move |_: &Event| {
                state.borrow_mut().end_drag();
            }));
        }

        {
            let state = Rc::clone(&state);
            listeners.push(EventListener::new_with_options(
                &slider.handle,
                "touchstart",
                non_passive(),
                move |event: &Event| {
                    state.borrow_mut().begin_drag();
                    event.prevent_default();
                },
            ));
        }

        {
            let container = slider.container.clone();
            let state = Rc::clone(&state);
            let slider = Rc::clone(&slider);
            listeners.push(EventListener::new_with_options(
                &container,
                "touchstart",
                non_passive(),
                move |event: &Event| {
                    let Some(event) = event.dyn_ref::<TouchEvent>() else {
                        return;
                    };
                    let Some(target) = dom::event_target_element(event) else {
                        return;
                    };
                    if !slider.is_surface(&target) {
                        return;
                    }
                    let Some(touch) = first_touch(event) else {
                        return;
                    };
                    if let Some(position) = slider.position_at(f64::from(touch.client_x())) {
                        slider.apply(state.borrow_mut().set_position(position));
                    }
                },
            ));
        }

        // Suppresses scrolling while a touch drag is active.
        {
            let state = Rc::clone(&state);
            let slider = Rc::clone(&slider);
            listeners.push(EventListener::new_with_options(
                document,
                "touchmove",
                non_passive(),
                move |event: &Event| {
                    if !state.borrow().dragging {
                        return;
                    }
                    let Some(event) = event.dyn_ref::<TouchEvent>() else {
                        return;
                    };
                    event.prevent_default();
                    let Some(touch) = first_touch(event) else {
                        return;
                    };
                    if let Some(position) = slider.position_at(f64::from(touch.client_x())) {
                        slider.apply(state.borrow_mut().set_position(position));
                    }
                },
            ));
        }

        {
            let state = Rc::clone(&state);
            listeners.push(EventListener::new(document, "touchend", move |_: &Event| {
                state.borrow_mut().end_drag();
            }));
        }

        // Arrow keys adjust the position whether or not a drag is active.
        {
            let state = Rc::clone(&state);
            let slider = Rc::clone(&slider);
            listeners.push(EventListener::new(
                document,
                "keydown",
                move |event: &Event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    let delta = match event.key().as_str() {
                        "ArrowLeft" => -KEY_STEP,
                        "ArrowRight" => KEY_STEP,
                        _ => return,
                    };
                    slider.apply(state.borrow_mut().nudge(delta));
                },
            ));
        }

        Some(Self {
            _listeners: listeners,
        })
    }
}

fn first_touch(event: &TouchEvent) -> Option<Touch> {
    event.touches().item(0)
}
