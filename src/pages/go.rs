//! Go Page
//!
//! Go-link creation form above the list of existing Go links. Unlike the
//! Tell edit flow, a successful creation re-renders the current view in
//! place rather than navigating away.

use leptos::*;

use crate::api;
use crate::components::TellLinks;
use crate::router::{current_hash, use_router};
use crate::state::use_session;

#[component]
pub fn GoPage(#[prop(optional_no_strip)] alias: Option<String>) -> impl IntoView {
    let session = use_session();
    if let Some(alias) = alias.as_deref() {
        session.info_message(&format!(
            "There is currently no Go Link for '{}'.  Please create one below, if you like.",
            alias
        ));
    }

    view! {
        <div class="go-view">
            <GoForm alias=alias.unwrap_or_default() />
            <TellLinks query="go" header_text="Go Links" />
        </div>
    }
}

#[component]
fn GoForm(#[prop(into)] alias: String) -> impl IntoView {
    let router = use_router();

    let (alias, set_alias) = create_signal(alias);
    let (go_url, set_go_url) = create_signal(String::new());
    let (tags, set_tags) = create_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let request = api::CreateGoLinkRequest {
            alias: alias.get(),
            go_url: go_url.get(),
            tags: tags.get(),
        };

        let router = router.clone();
        spawn_local(async move {
            match api::create_go_link(&request).await {
                Ok(()) => {
                    router.show_view(&current_hash());
                }
                Err(error) => {
                    logging::error!("Go link creation failed: {}", error);
                }
            }
        });
    };

    view! {
        <form id="go-form" class="go-form" on:submit=on_submit>
            <label>
                "Alias"
                <input
                    class="alias"
                    type="text"
                    prop:value=move || alias.get()
                    on:input=move |ev| set_alias.set(event_target_value(&ev))
                />
            </label>
            <label>
                "URL"
                <input
                    class="go_url"
                    type="text"
                    placeholder="http://..."
                    prop:value=move || go_url.get()
                    on:input=move |ev| set_go_url.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Tags"
                <input
                    class="tags"
                    type="text"
                    prop:value=move || tags.get()
                    on:input=move |ev| set_tags.set(event_target_value(&ev))
                />
            </label>
            <button class="go-submit" type="submit">"Create"</button>
        </form>
    }
}
