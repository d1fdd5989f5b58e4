use tsukikage_core::filter::{card_visible, query_from_controls, FilterQuery};

fn query(category: &str, search: &str) -> FilterQuery {
    query_from_controls(Some(category), Some(search))
}

#[test]
fn all_category_shows_every_card() {
    let q = query("all", "");
    assert!(card_visible("design", "Brand refresh", &q));
    assert!(card_visible("dev", "Storefront build", &q));
}

#[test]
fn category_filter_hides_other_categories() {
    let q = query("design", "");
    assert!(card_visible("design", "Brand refresh", &q));
    assert!(!card_visible("dev", "Storefront build", &q));
}

#[test]
fn search_matches_are_case_insensitive() {
    let q = query("all", "BRAND");
    assert!(card_visible("design", "Brand refresh", &q));

    let q = query("all", "refresh");
    assert!(card_visible("design", "Brand REFRESH", &q));
}

#[test]
fn search_misses_hide_the_card() {
    let q = query("all", "storefront");
    assert!(!card_visible("design", "Brand refresh", &q));
}

#[test]
fn category_and_search_combine() {
    let q = query("design", "refresh");
    assert!(card_visible("design", "Brand refresh", &q));
    // Right text, wrong category.
    assert!(!card_visible("dev", "Platform refresh", &q));
    // Right category, wrong text.
    assert!(!card_visible("design", "Logo sketches", &q));
}

#[test]
fn empty_search_matches_everything() {
    let q = query("all", "");
    assert!(card_visible("design", "", &q));
}

#[test]
fn missing_controls_default_to_all_and_empty() {
    let q = query_from_controls(None, None);
    assert_eq!(q, FilterQuery::default());
    assert!(card_visible("dev", "anything", &q));
}

#[test]
fn search_term_is_lowercased_once_at_the_controls() {
    let q = query_from_controls(Some("all"), Some("ReFresh"));
    assert_eq!(q.search, "refresh");
}
