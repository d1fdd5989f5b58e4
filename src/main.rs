//! Boot wiring for the site: scan the template registry, mount every
//! widget, run the initial navigation, and keep the widgets alive for
//! the page lifetime.

// The binary only does real work in the browser; native builds (the test
// harness) compile everything but never call into it.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code, unused_imports))]

mod dom;
mod effects;
mod gallery;
mod menu;
mod registry;
mod router;
mod slider;
mod trail;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;

use crate::effects::PageEffects;
use crate::gallery::CardGallery;
use crate::menu::MobileMenu;
use crate::registry::TemplateRegistry;
use crate::router::{PageHook, PageRouter};
use crate::slider::CompareSlider;
use crate::trail::CursorTrail;

/// Page whose article view hosts the comparison slider.
const SLIDER_PAGE: &str = "project-1";

struct SiteApp {
    _router: Rc<PageRouter>,
    _menu: Option<MobileMenu>,
    _gallery: Option<CardGallery>,
    _effects: PageEffects,
    _trail: Option<CursorTrail>,
}

thread_local! {
    static APP: RefCell<Option<SiteApp>> = RefCell::new(None);
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    boot();
}

fn boot() {
    let Some(window) = dom::window() else {
        return;
    };
    let Some(document) = dom::document() else {
        console::error!("boot: no document, nothing to bind");
        return;
    };

    let registry = TemplateRegistry::scan(&document);
    console::log!("boot: registered page templates", registry.len() as u32);

    // The router only knows page ids; what happens when one is shown is
    // configured here. The slider mounts on its host page and is dropped
    // (listeners detached) whenever any other view is shown, so repeated
    // visits never stack listeners.
    let slider_slot: Rc<RefCell<Option<CompareSlider>>> = Rc::new(RefCell::new(None));
    let slider_hook: PageHook = {
        let slot = Rc::clone(&slider_slot);
        let document = document.clone();
        Rc::new(move |active: bool| {
            slot.borrow_mut().take();
            if active {
                *slot.borrow_mut() = CompareSlider::mount(&document);
            }
        })
    };
    let hooks = vec![(SLIDER_PAGE.to_string(), slider_hook)];

    let Some(router) = PageRouter::mount(&window, &document, registry, hooks) else {
        console::error!("boot: main containers missing, router disabled");
        return;
    };

    let menu = MobileMenu::mount(&document);
    let gallery = CardGallery::mount(&document);
    let effects = PageEffects::mount(&window, &document);
    let trail = CursorTrail::mount(&window, &document);

    // Initial load applies whatever fragment the page arrived with.
    router.navigate_current();

    APP.with(|slot| {
        *slot.borrow_mut() = Some(SiteApp {
            _router: router,
            _menu: menu,
            _gallery: gallery,
            _effects: effects,
            _trail: trail,
        });
    });
}
