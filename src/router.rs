//! Hash router: swaps the main document and templated pages in and out of
//! view based on the location fragment, without full navigations.
//!
//! The widget owns its listeners; dropping it detaches them. Route
//! resolution itself is pure (`tsukikage_core::route`) and the DOM
//! mutation is applied afterwards, always before any scrolling.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::{Document, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use tsukikage_core::route::{normalize_fragment, resolve, Route};

use crate::dom;
use crate::registry::TemplateRegistry;

/// Fixed header height the anchor scroll compensates for.
const HEADER_OFFSET_PX: f64 = 100.0;

/// Hook run after every transition; `active` is true when the page it was
/// registered for has just been shown.
pub(crate) type PageHook = Rc<dyn Fn(bool)>;

pub(crate) struct PageRouter {
    window: Window,
    document: Document,
    registry: TemplateRegistry,
    main: HtmlElement,
    page_view: HtmlElement,
    hooks: Vec<(String, PageHook)>,
    listeners: RefCell<Vec<EventListener>>,
    back_listeners: RefCell<Vec<EventListener>>,
}

impl PageRouter {
    pub(crate) fn mount(
        window: &Window,
        document: &Document,
        registry: TemplateRegistry,
        hooks: Vec<(String, PageHook)>,
    ) -> Option<Rc<Self>> {
        let main = dom::html_element_by_id(document, "main-content")?;
        let page_view = dom::html_element_by_id(document, "page-view")?;
        let router = Rc::new(Self {
            window: window.clone(),
            document: document.clone(),
            registry,
            main,
            page_view,
            hooks,
            listeners: RefCell::new(Vec::new()),
            back_listeners: RefCell::new(Vec::new()),
        });
        router.install_listeners();
        Some(router)
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();

        let router = Rc::clone(self);
        listeners.push(EventListener::new(&self.window, "hashchange", move |_| {
            router.navigate_current();
        }));

        let router = Rc::clone(self);
        listeners.push(EventListener::new(
            &self.document,
            "click",
            move |event: &Event| {
                router.on_document_click(event);
            },
        ));

        *self.listeners.borrow_mut() = listeners;
    }

    /// Applies whatever the location fragment currently says. Run once at
    /// boot and again on every fragment change.
    pub(crate) fn navigate_current(self: &Rc<Self>) {
        let fragment = self.window.location().hash().unwrap_or_default();
        self.apply(&fragment);
    }

    fn apply(self: &Rc<Self>, fragment: &str) {
        let route = resolve(fragment, |key| self.registry.contains(key));
        match &route {
            Route::Article { page } => self.show_article(page),
            Route::List { anchor } => self.show_list(anchor.as_deref()),
        }
        let shown = match &route {
            Route::Article { page } => Some(page.as_str()),
            Route::List { .. } => None,
        };
        for (page, hook) in &self.hooks {
            hook(shown == Some(page.as_str()));
        }
    }

    fn show_article(self: &Rc<Self>, page: &str) {
        let Some(content) = self.registry.lookup(page) else {
            // Resolution only yields registered pages; a miss here means
            // the registry changed under us, treat as list view.
            self.show_list(None);
            return;
        };
        let _ = self.main.style().set_property("display", "none");
        self.page_view.set_inner_html(content);
        let _ = self.page_view.style().set_property("display", "block");
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
        self.bind_back_links();
    }

    fn show_list(&self, anchor: Option<&str>) {
        self.back_listeners.borrow_mut().clear();
        self.page_view.set_inner_html("");
        let _ = self.page_view.style().set_property("display", "none");
        let _ = self.main.style().set_property("display", "block");

        let Some(anchor) = anchor else {
            return;
        };
        let Some(target) = dom::html_element_by_id(&self.document, anchor) else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(f64::from(target.offset_top()) - HEADER_OFFSET_PX);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    /// Content injected into the page view carries its own back links;
    /// they clear the fragment without a reload and re-enter list view.
    fn bind_back_links(self: &Rc<Self>) {
        let mut bound = Vec::new();
        let Ok(links) = self.page_view.query_selector_all(".back-link") else {
            return;
        };
        for index in 0..links.length() {
            let Some(link) = links.item(index) else {
                continue;
            };
            let router = Rc::clone(self);
            bound.push(EventListener::new(&link, "click", move |event: &Event| {
                event.prevent_default();
                router.clear_fragment();
                router.navigate_current();
            }));
        }
        *self.back_listeners.borrow_mut() = bound;
    }

    fn clear_fragment(&self) {
        let location = self.window.location();
        let path = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        let Ok(history) = self.window.history() else {
            return;
        };
        let _ = history.push_state_with_url(
            &JsValue::NULL,
            "",
            Some(&format!("{path}{search}")),
        );
    }

    fn on_document_click(self: &Rc<Self>, event: &Event) {
        let Some(target) = dom::event_target_element(event) else {
            return;
        };
        let Ok(Some(link)) = target.closest("a.page-link") else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let fragment = normalize_fragment(&href);
        if !self.registry.contains(fragment) {
            // Section anchors keep their native navigation; the hashchange
            // listener picks the transition up.
            return;
        }
        event.prevent_default();
        if let Ok(history) = self.window.history() {
            let _ = history.push_state_with_url(
                &JsValue::NULL,
                "",
                Some(&format!("#{fragment}")),
            );
        }
        self.apply(fragment);
    }
}
