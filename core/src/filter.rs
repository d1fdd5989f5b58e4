//! Card visibility predicate for the filterable grids.

/// Category value that matches every card.
pub const ALL_CATEGORIES: &str = "all";

/// Active filter controls, read live from the DOM on every evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterQuery {
    pub category: String,
    pub search: String,
}

impl Default for FilterQuery {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
        }
    }
}

/// Builds a query from the raw control values. A missing active pill means
/// "all"; a missing search input means no text filter. Search text is
/// matched case-insensitively, so it is lowercased once here.
pub fn query_from_controls(
    active_category: Option<&str>,
    search_raw: Option<&str>,
) -> FilterQuery {
    FilterQuery {
        category: active_category.unwrap_or(ALL_CATEGORIES).to_string(),
        search: search_raw.unwrap_or("").to_lowercase(),
    }
}

/// A card is visible iff its category matches the active filter (or the
/// filter is "all") and its text contains the search term (or the term is
/// empty). `card_text` is the concatenation of the card's searchable
/// fields; missing fields contribute nothing.
pub fn card_visible(card_category: &str, card_text: &str, query: &FilterQuery) -> bool {
    let matches_category =
        query.category == ALL_CATEGORIES || card_category == query.category;
    let matches_search =
        query.search.is_empty() || card_text.to_lowercase().contains(&query.search);
    matches_category && matches_search
}
