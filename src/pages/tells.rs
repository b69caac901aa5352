//! Tells Page
//!
//! Category badge strip plus the Tells list for a query string.

use leptos::*;

use crate::components::{CategoryBadges, TellLinks};
use crate::wiring::{display_categories, lookup_description, ALL_TELLS};

#[component]
pub fn TellsPage(#[prop(optional_no_strip)] query: Option<String>) -> impl IntoView {
    let query = query.unwrap_or_else(|| ALL_TELLS.to_string());
    let header = if query == ALL_TELLS {
        "All Tells".to_string()
    } else {
        query_string_description(&query)
    };
    let categories: Vec<String> = display_categories().map(str::to_string).collect();

    view! {
        <div class="tells-view">
            <CategoryBadges categories=categories />
            <TellLinks query=query header_text=header />
        </div>
    }
}

/// Human-readable description of a query string: the category description
/// when the query is a known category, otherwise a generic tag-filter label.
pub fn query_string_description(query_string: &str) -> String {
    lookup_description(query_string, false)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Tells with tags/categories: {}", query_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_category_uses_display_description() {
        assert_eq!(query_string_description("tellus-go"), "Go Links");
    }

    #[test]
    fn unknown_query_gets_generic_label() {
        assert_eq!(
            query_string_description("coffee-bot"),
            "Tells with tags/categories: coffee-bot"
        );
    }
}
