//! Template discovery. Page content lives in `<template>` elements in the
//! static document; the registry maps fragment keys to their serialized
//! markup. Built once at boot, read-only afterwards.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use tsukikage_core::route::page_key_for_template;

pub(crate) struct TemplateRegistry {
    pages: HashMap<String, String>,
}

impl TemplateRegistry {
    /// Scans the document for page templates: every `template` whose id
    /// matches the page prefix, plus the fixed special pages.
    pub(crate) fn scan(document: &Document) -> Self {
        let mut pages = HashMap::new();
        let Ok(list) = document.query_selector_all("template") else {
            return Self { pages };
        };
        for index in 0..list.length() {
            let Some(element) =
                list.item(index).and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            let id = element.id();
            if let Some(key) = page_key_for_template(&id) {
                pages.insert(key.to_string(), element.inner_html());
            }
        }
        Self { pages }
    }

    /// A miss is the normal "this is not a templated page" outcome.
    pub(crate) fn lookup(&self, key: &str) -> Option<&str> {
        self.pages.get(key).map(String::as_str)
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.pages.contains_key(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.pages.len()
    }
}
