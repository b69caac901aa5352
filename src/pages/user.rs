//! User Page
//!
//! Detail view for a single Tellus user: external links, Coffee Bot pairing,
//! and the contact card.

use std::rc::Rc;

use leptos::*;

use crate::api;
use crate::components::{CoffeeBotCard, UserCard, UserLinksCard};
use crate::model::TellusUser;
use crate::state::use_session;

#[component]
pub fn UserPage(#[prop(optional_no_strip)] alias: Option<String>) -> impl IntoView {
    let session = use_session();
    let user = create_rw_signal(None::<Rc<TellusUser>>);

    if let Some(alias) = alias {
        create_effect(move |_| {
            let alias = alias.clone();
            let cache = session.users.clone();
            spawn_local(async move {
                match api::fetch_user(&alias).await {
                    Ok(data) => {
                        let _ = user.try_set(Some(cache.insert(&alias, data)));
                    }
                    Err(error) => {
                        logging::error!("User fetch for '{}' failed: {}", alias, error);
                    }
                }
            });
        });
    }

    view! {
        <div class="user-view row">
            {move || user.get().map(|user| view! {
                <div class="col-md-3">
                    <UserLinksCard user=Rc::clone(&user) />
                    <CoffeeBotCard user=Rc::clone(&user) />
                </div>
                <div class="col-md-6">
                    <UserCard user=user />
                </div>
            })}
        </div>
    }
}
