//! Tell link lists
//!
//! The workhorse list component: fetch a Tell query, render a header with a
//! count and one link row per Tell, in the server's order.

use leptos::*;

use crate::api;
use crate::components::badges::TagBadges;
use crate::components::linkify::page_origin;
use crate::model::tell::{tell_link_href, tellus_go_url};
use crate::model::Tell;
use crate::wiring::PARAM_SEPARATOR;

/// A linked list of Tells matching a query string.
///
/// The header links to `#<query>` unless `header_link` overrides it. The
/// skeleton renders immediately; rows appear when the query resolves. A
/// failed fetch leaves the list empty and logs to the console.
#[component]
pub fn TellLinks(
    #[prop(into)] query: String,
    #[prop(into)] header_text: String,
    #[prop(optional, into)] header_link: Option<String>,
    #[prop(optional, into)] tooltip: Option<String>,
    #[prop(optional)] extended: bool,
) -> impl IntoView {
    let tells = create_rw_signal(None::<Vec<Tell>>);

    {
        let query = query.clone();
        create_effect(move |_| {
            let query = query.clone();
            spawn_local(async move {
                match api::query_tells(&query).await {
                    Ok(list) => {
                        // The view may have been swapped while the fetch was
                        // in flight; a disposed signal just drops the result.
                        let _ = tells.try_set(Some(list));
                    }
                    Err(error) => {
                        logging::error!("Tell query '{}' failed: {}", query, error);
                    }
                }
            });
        });
    }

    let header_href = format!("#{}", header_link.unwrap_or_else(|| query.clone()));

    view! {
        <div class=format!("tellus-links links-{}", query)>
            <a
                class="tellus-link-header list-group-item active"
                href=header_href
                title=tooltip
            >
                <span class="tellus-link-header-text">{header_text}</span>
                " "
                <span class="tell-count">
                    {move || tells.get().map(|list| list.len())}
                </span>
            </a>
            {move || {
                tells.get().map(|list| {
                    list.into_iter()
                        .map(|tell| view! { <TellLinkItem tell=tell extended=extended /> })
                        .collect_view()
                })
            }}
        </div>
    }
}

/// One Tell row: alias text linking to the Go URL (or the Tell page when the
/// Tell has no go_url), an edit link, and the description as tooltip. Tells
/// with server diagnostics are highlighted and get the diagnostics appended
/// to their tooltip.
#[component]
fn TellLinkItem(tell: Tell, #[prop(optional)] extended: bool) -> impl IntoView {
    let href = tell_link_href(&tell, &page_origin());
    let edit_href = format!("#t{}{}", PARAM_SEPARATOR, tell.alias());
    let link_class = if tell.tell_errors().is_some() {
        "tellus-link tellus-link-error"
    } else {
        "tellus-link"
    };
    let tooltip = tell.tooltip();
    let alias = tell.alias().to_string();
    let description = tell.description().unwrap_or_default().to_string();
    let tags = tell.tags().to_vec();

    view! {
        <div class="tellus-link-item" title=tooltip>
            <a class=link_class href=href>{alias}</a>
            " "
            <a class="tellus-edit" href=edit_href>"edit"</a>
            {extended.then(|| view! {
                <div class="tlie-description">{description}</div>
                <TagBadges tags=tags />
            })}
        </div>
    }
}

/// The standard Go URL for a Tell on the current instance, as a card.
#[component]
pub fn GoLinkCard(#[prop(into)] alias: String) -> impl IntoView {
    let url = tellus_go_url(&page_origin(), &alias);

    view! {
        <div class="tellus-go-link">
            <a class="tellus-go-href" href=url.clone()>{url}</a>
        </div>
    }
}
