//! Fragment resolution for the hash router.
//!
//! The browser location's fragment is the sole routing signal. A fragment
//! either names a registered page template (article view) or a section
//! anchor inside the main document (list view). Resolution is recomputed
//! from scratch on every navigation event; no route object outlives it.

/// Template element ids starting with this prefix register as pages under
/// their own id.
pub const PAGE_PREFIX: &str = "project-";

/// Fixed special templates: (template element id, fragment key).
pub const SPECIAL_PAGES: [(&str, &str); 2] = [
    ("privacy-policy-page", "privacy-policy"),
    ("terms-conditions-page", "terms-conditions"),
];

/// Section targeted when the fragment is empty.
pub const DEFAULT_ANCHOR: &str = "home";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// The main document with its sections; `anchor` is the section to
    /// scroll to, if any.
    List { anchor: Option<String> },
    /// A single templated page rendered in the page container.
    Article { page: String },
}

/// Fragment key a template element registers under, or None when the
/// element is not a page template.
pub fn page_key_for_template(template_id: &str) -> Option<&str> {
    if template_id.starts_with(PAGE_PREFIX) {
        return Some(template_id);
    }
    SPECIAL_PAGES
        .iter()
        .find(|(id, _)| *id == template_id)
        .map(|(_, key)| *key)
}

/// Strips the leading `#` and surrounding whitespace from a raw fragment.
pub fn normalize_fragment(raw: &str) -> &str {
    raw.trim().trim_start_matches('#').trim()
}

/// Resolves a location fragment against the set of registered pages.
pub fn resolve<F>(raw_fragment: &str, is_page: F) -> Route
where
    F: Fn(&str) -> bool,
{
    let fragment = normalize_fragment(raw_fragment);
    if fragment.is_empty() {
        return Route::List {
            anchor: Some(DEFAULT_ANCHOR.to_string()),
        };
    }
    if is_page(fragment) {
        return Route::Article {
            page: fragment.to_string(),
        };
    }
    Route::List {
        anchor: Some(fragment.to_string()),
    }
}
