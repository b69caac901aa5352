//! Message banners
//!
//! The transient info/danger banner row. The router clears these on every
//! navigation so stale errors never leak across views.

use leptos::*;

use crate::state::session::MessageLevel;
use crate::state::use_session;

#[component]
pub fn Messages() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="tellus-message">
            {move || {
                session.messages.get().into_iter().map(|message| {
                    let class = match message.level {
                        MessageLevel::Info => "alert alert-info tellus-info",
                        MessageLevel::Danger => "alert alert-danger tellus-danger",
                    };
                    view! { <div class=class>{message.text}</div> }
                }).collect_view()
            }}
        </div>
    }
}
