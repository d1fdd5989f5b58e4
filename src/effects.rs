//! Scroll- and visibility-driven decoration: reveal-on-scroll, the
//! back-to-top affordance, the ambient video, and the cursor glow.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    Document, DomException, Event, HtmlElement, HtmlVideoElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, Window,
};

use crate::dom;

/// Scroll offset past which the back-to-top affordance shows.
const BACK_TO_TOP_OFFSET_PX: f64 = 300.0;

/// Visibility fraction that counts as "on screen" for reveal and video.
const VISIBILITY_THRESHOLD: f64 = 0.1;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub(crate) struct PageEffects {
    observers: Vec<IntersectionObserver>,
    _callbacks: Vec<ObserverCallback>,
    _listeners: Vec<EventListener>,
}

impl PageEffects {
    pub(crate) fn mount(window: &Window, document: &Document) -> Self {
        let mut observers = Vec::new();
        let mut callbacks = Vec::new();
        let mut listeners = Vec::new();

        mount_reveal(document, &mut observers, &mut callbacks);
        mount_back_to_top(window, document, &mut listeners);
        mount_video(document, &mut observers, &mut callbacks);
        mount_glow(document, &mut listeners);

        Self {
            observers,
            _callbacks: callbacks,
            _listeners: listeners,
        }
    }
}

impl Drop for PageEffects {
    fn drop(&mut self) {
        for observer in &self.observers {
            observer.disconnect();
        }
    }
}

fn visibility_observer<F>(
    on_entry: F,
    observers: &mut Vec<IntersectionObserver>,
    callbacks: &mut Vec<ObserverCallback>,
) -> Option<IntersectionObserver>
where
    F: FnMut(&IntersectionObserverEntry) + 'static,
{
    let mut on_entry = on_entry;
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                on_entry(&entry);
            }
        },
    ));
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .ok()?;
    callbacks.push(callback);
    observers.push(observer.clone());
    Some(observer)
}

/// Flagged elements gain their active state once they have been seen;
/// the state is never removed.
fn mount_reveal(
    document: &Document,
    observers: &mut Vec<IntersectionObserver>,
    callbacks: &mut Vec<ObserverCallback>,
) {
    let targets = dom::query_all(document, ".reveal");
    if targets.is_empty() {
        return;
    }
    let Some(observer) = visibility_observer(
        |entry| {
            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1("active");
            }
        },
        observers,
        callbacks,
    ) else {
        return;
    };
    for target in &targets {
        observer.observe(target);
    }
}

fn mount_back_to_top(window: &Window, document: &Document, listeners: &mut Vec<EventListener>) {
    let Some(button) = dom::element_by_id(document, "back-to-top") else {
        return;
    };
    let win = window.clone();
    listeners.push(EventListener::new(window, "scroll", move |_: &Event| {
        let offset = win.scroll_y().unwrap_or(0.0);
        let class_list = button.class_list();
        if offset > BACK_TO_TOP_OFFSET_PX {
            let _ = class_list.add_1("visible");
        } else {
            let _ = class_list.remove_1("visible");
        }
    }));
}

/// The ambient video only plays while its section is on screen. Pausing
/// an in-flight play() rejects with an AbortError, which is expected;
/// anything else gets logged.
fn mount_video(
    document: &Document,
    observers: &mut Vec<IntersectionObserver>,
    callbacks: &mut Vec<ObserverCallback>,
) {
    let video = dom::element_by_id(document, "ambient-video")
        .and_then(|element| element.dyn_into::<HtmlVideoElement>().ok());
    let section = dom::element_by_id(document, "services");
    let (Some(video), Some(section)) = (video, section) else {
        return;
    };
    let Some(observer) = visibility_observer(
        move |entry| {
            if entry.is_intersecting() {
                let Ok(promise) = video.play() else {
                    return;
                };
                spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        if !is_abort_error(&err) {
                            console::error!("video: playback error", err);
                        }
                    }
                });
            } else {
                let _ = video.pause();
            }
        },
        observers,
        callbacks,
    ) else {
        return;
    };
    observer.observe(&section);
}

fn is_abort_error(err: &JsValue) -> bool {
    err.dyn_ref::<DomException>()
        .map(|exception| exception.name() == "AbortError")
        .unwrap_or(false)
}

/// The glow chases the pointer, coalescing bursts of mousemove into at
/// most one style write per frame.
fn mount_glow(document: &Document, listeners: &mut Vec<EventListener>) {
    let Some(glow) = dom::html_element_by_id(document, "cursor-glow") else {
        return;
    };
    let position: Rc<Cell<(f64, f64)>> = Rc::new(Cell::new((0.0, 0.0)));
    let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

    listeners.push(EventListener::new(
        document,
        "mousemove",
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            position.set((f64::from(event.client_x()), f64::from(event.client_y())));
            if frame.borrow().is_some() {
                return;
            }
            let glow = glow.clone();
            let position = Rc::clone(&position);
            let frame_slot = Rc::clone(&frame);
            let handle = request_animation_frame(move |_| {
                frame_slot.borrow_mut().take();
                let (x, y) = position.get();
                let _ = glow
                    .style()
                    .set_property("transform", &format!("translate({x}px, {y}px)"));
            });
            *frame.borrow_mut() = Some(handle);
        },
    ));
}
