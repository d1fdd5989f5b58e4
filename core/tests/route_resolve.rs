use tsukikage_core::route::{
    normalize_fragment, page_key_for_template, resolve, Route, DEFAULT_ANCHOR,
};

fn is_page(fragment: &str) -> bool {
    matches!(fragment, "project-1" | "project-2" | "privacy-policy")
}

#[test]
fn registered_fragment_resolves_to_article() {
    let route = resolve("#project-1", is_page);
    assert_eq!(
        route,
        Route::Article {
            page: "project-1".to_string()
        }
    );
}

#[test]
fn special_page_resolves_to_article() {
    let route = resolve("#privacy-policy", is_page);
    assert_eq!(
        route,
        Route::Article {
            page: "privacy-policy".to_string()
        }
    );
}

#[test]
fn unregistered_fragment_resolves_to_list_anchor() {
    let route = resolve("#services", is_page);
    assert_eq!(
        route,
        Route::List {
            anchor: Some("services".to_string())
        }
    );
}

#[test]
fn empty_fragment_defaults_to_home() {
    for raw in ["", "#", "  "] {
        let route = resolve(raw, is_page);
        assert_eq!(
            route,
            Route::List {
                anchor: Some(DEFAULT_ANCHOR.to_string())
            },
            "raw fragment {raw:?}"
        );
    }
}

#[test]
fn fragment_without_sigil_still_resolves() {
    let route = resolve("project-2", is_page);
    assert_eq!(
        route,
        Route::Article {
            page: "project-2".to_string()
        }
    );
}

#[test]
fn normalize_strips_sigil_and_whitespace() {
    assert_eq!(normalize_fragment(" #project-1 "), "project-1");
    assert_eq!(normalize_fragment("home"), "home");
    assert_eq!(normalize_fragment("#"), "");
}

#[test]
fn prefixed_template_registers_under_own_id() {
    assert_eq!(page_key_for_template("project-7"), Some("project-7"));
}

#[test]
fn special_templates_register_under_fragment_keys() {
    assert_eq!(
        page_key_for_template("privacy-policy-page"),
        Some("privacy-policy")
    );
    assert_eq!(
        page_key_for_template("terms-conditions-page"),
        Some("terms-conditions")
    );
}

#[test]
fn unrelated_template_does_not_register() {
    assert_eq!(page_key_for_template("hero-banner"), None);
    assert_eq!(page_key_for_template(""), None);
}
