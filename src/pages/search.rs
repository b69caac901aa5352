//! Search Page
//!
//! The Tells list under a search-results header.

use leptos::*;

use crate::components::TellLinks;
use crate::wiring::ALL_TELLS;

#[component]
pub fn SearchPage(#[prop(optional_no_strip)] query: Option<String>) -> impl IntoView {
    let query = query.unwrap_or_else(|| ALL_TELLS.to_string());
    let header = if query == ALL_TELLS {
        "All Tells".to_string()
    } else {
        format!("Search Results for {}", query)
    };

    view! {
        <div class="search-view">
            <TellLinks query=query header_text=header />
        </div>
    }
}
