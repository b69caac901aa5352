//! Navigation Component
//!
//! Header navigation bar. The entry matching the current full hash is marked
//! active; an empty hash counts as home.

use leptos::*;

use crate::model::user::tellus_user_url;
use crate::router::use_router;
use crate::state::use_session;

#[component]
pub fn Nav() -> impl IntoView {
    let session = use_session();

    view! {
        <nav class="navbar">
            <a class="navbar-brand" href="#home">"Tellus"</a>

            <div class="navbar-nav">
                <NavLink href="#home" label="Home" />
                <NavLink href="#go" label="Go" />
                <NavLink href="#tells" label="Tells" />
                <NavLink href="#who" label="Who" />
                <NavLink href="#social" label="Social" />
                <NavLink href="#sources" label="Sources" />
                <NavLink href="#dns" label="DNS" />
                <NavLink href="#tools" label="Tools" />
            </div>

            <div class="navbar-username tellus-current-user">
                {move || match session.current_user.get() {
                    Some(username) => view! {
                        <a class="tellus-user-page-link" href=tellus_user_url(&username)>
                            {username}
                        </a>
                    }
                    .into_view(),
                    None => "No User".into_view(),
                }}
            </div>
        </nav>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    let active_hash = use_router().active_hash();

    view! {
        <a
            href=href
            class=move || {
                if active_hash.get() == href {
                    "nav-link active"
                } else {
                    "nav-link"
                }
            }
        >
            {label}
        </a>
    }
}
