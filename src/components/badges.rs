//! Tag and category badges.
//!
//! Every badge links to the Tells list filtered by its tag/category.

use leptos::*;

use crate::wiring::{display_description, display_name, link_query};

/// One badge per tag, in order.
#[component]
pub fn TagBadges(#[prop(into)] tags: Vec<String>) -> impl IntoView {
    view! {
        <span class="tellus-tags">
            {tags.into_iter().map(|tag| {
                let href = link_query(&tag);
                view! {
                    <a class="badge tellus-tag" href=href>{tag}</a>
                }
            }).collect_view()}
        </span>
    }
}

/// One badge per category, in order, carrying the category's display name and
/// description (placeholders for unrecognized keys).
#[component]
pub fn CategoryBadges(#[prop(into)] categories: Vec<String>) -> impl IntoView {
    view! {
        <span class="tellus-categories">
            {categories.into_iter().map(|category| {
                let href = link_query(&category);
                let name = display_name(&category, false);
                let description = display_description(&category, false);
                view! {
                    <a class="badge tellus-category" href=href title=description>{name}</a>
                }
            }).collect_view()}
        </span>
    }
}
