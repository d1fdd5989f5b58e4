//! Canvas cursor trail. Physics lives in `tsukikage_core::trail`; this
//! widget owns the canvas, the pointer listeners, and a self-scheduling
//! animation frame loop whose handle makes it cancellable.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, Event, HtmlCanvasElement, MouseEvent, TouchEvent, Window,
};

use tsukikage_core::trail::{idle_target, Trail, TrailParams};

use crate::dom;

/// The trail only runs on viewports at least this wide.
const MIN_VIEWPORT_QUERY: &str = "(min-width: 768px)";

pub(crate) struct CursorTrail {
    inner: Rc<TrailInner>,
}

struct TrailInner {
    window: Window,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    trail: RefCell<Trail>,
    pointer: Cell<(f64, f64)>,
    pointer_moved: Cell<bool>,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl CursorTrail {
    pub(crate) fn mount(window: &Window, document: &Document) -> Option<Self> {
        if !wide_viewport(window) {
            return None;
        }
        let canvas = dom::element_by_id(document, "trail-canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let context = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let (width, height) = viewport_size(window);
        let center = (0.5 * width, 0.5 * height);
        let inner = Rc::new(TrailInner {
            window: window.clone(),
            canvas,
            context,
            trail: RefCell::new(Trail::new(TrailParams::default(), center.0, center.1)),
            pointer: Cell::new(center),
            pointer_moved: Cell::new(false),
            frame: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });

        install_listeners(&inner);
        resize_canvas(&inner);
        schedule(&inner);
        Some(Self { inner })
    }

    /// Cancels the loop; listeners go with the widget.
    pub(crate) fn stop(&self) {
        self.inner.frame.borrow_mut().take();
        self.inner.listeners.borrow_mut().clear();
    }
}

impl Drop for CursorTrail {
    fn drop(&mut self) {
        self.stop();
    }
}

fn wide_viewport(window: &Window) -> bool {
    window
        .match_media(MIN_VIEWPORT_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

fn install_listeners(inner: &Rc<TrailInner>) {
    let window = inner.window.clone();
    let mut listeners = Vec::new();

    // A click drops the chain onto the pointer without marking it moved,
    // so the idle wander resumes afterwards.
    {
        let inner = Rc::clone(inner);
        listeners.push(EventListener::new(&window, "click", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            inner
                .pointer
                .set((f64::from(event.page_x()), f64::from(event.page_y())));
        }));
    }

    {
        let inner = Rc::clone(inner);
        listeners.push(EventListener::new(
            &window,
            "mousemove",
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                inner.pointer_moved.set(true);
                inner
                    .pointer
                    .set((f64::from(event.page_x()), f64::from(event.page_y())));
            },
        ));
    }

    {
        let inner = Rc::clone(inner);
        listeners.push(EventListener::new(
            &window,
            "touchmove",
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                let Some(touch) = event.target_touches().item(0) else {
                    return;
                };
                inner.pointer_moved.set(true);
                inner
                    .pointer
                    .set((f64::from(touch.page_x()), f64::from(touch.page_y())));
            },
        ));
    }

    {
        let inner = Rc::clone(inner);
        listeners.push(EventListener::new(&window, "resize", move |_: &Event| {
            resize_canvas(&inner);
        }));
    }

    *inner.listeners.borrow_mut() = listeners;
}

fn resize_canvas(inner: &TrailInner) {
    let (width, height) = viewport_size(&inner.window);
    inner.canvas.set_width(width as u32);
    inner.canvas.set_height(height as u32);
}

fn schedule(inner: &Rc<TrailInner>) {
    let this = Rc::clone(inner);
    let handle = request_animation_frame(move |timestamp| {
        this.frame.borrow_mut().take();
        tick(&this, timestamp);
        schedule(&this);
    });
    *inner.frame.borrow_mut() = Some(handle);
}

fn tick(inner: &TrailInner, timestamp: f64) {
    let (width, height) = (
        f64::from(inner.canvas.width()),
        f64::from(inner.canvas.height()),
    );
    let target = if inner.pointer_moved.get() {
        inner.pointer.get()
    } else {
        // Idle wander: a deterministic parametric path keeps the trail
        // alive until the pointer first moves.
        idle_target(timestamp, width, height)
    };
    let mut trail = inner.trail.borrow_mut();
    trail.step(target.0, target.1);
    draw(inner, &trail, width, height);
}

fn draw(inner: &TrailInner, trail: &Trail, width: f64, height: f64) {
    let context = &inner.context;
    context.clear_rect(0.0, 0.0, width, height);

    let points = trail.points();
    if points.len() < 2 {
        return;
    }
    context.set_stroke_style_str("white");
    context.set_line_cap("round");
    context.begin_path();
    context.move_to(points[0].x, points[0].y);
    for index in 1..points.len() - 1 {
        let mid_x = 0.5 * (points[index].x + points[index + 1].x);
        let mid_y = 0.5 * (points[index].y + points[index + 1].y);
        context.quadratic_curve_to(points[index].x, points[index].y, mid_x, mid_y);
        context.set_line_width(trail.segment_width(index));
        context.stroke();
    }
    let last = points[points.len() - 1];
    context.line_to(last.x, last.y);
    context.stroke();
}
