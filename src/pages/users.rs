//! Users Page
//!
//! The full user directory as a table. Fetched users land in the session
//! cache so other views can resolve full names without refetching.

use std::rc::Rc;

use leptos::*;

use crate::api;
use crate::components::{Linkify, UserPageLink};
use crate::model::TellusUser;
use crate::state::use_session;

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = use_session();
    let users = create_rw_signal(None::<Vec<Rc<TellusUser>>>);

    create_effect(move |_| {
        let cache = session.users.clone();
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(response) => {
                    cache.cache_all(&response);
                    let list: Vec<Rc<TellusUser>> = response
                        .keys()
                        .filter_map(|alias| cache.lookup(alias))
                        .collect();
                    let _ = users.try_set(Some(list));
                }
                Err(error) => {
                    logging::error!("User query failed: {}", error);
                }
            }
        });
    });

    view! {
        <div class="users-view">
            <table class="tellus-users table">
                <thead>
                    <tr>
                        <th class="users-header-name">
                            {move || {
                                let count = users.get().map(|list| list.len()).unwrap_or(0);
                                format!("Name ({})", count)
                            }}
                        </th>
                        <th>"Email"</th>
                        <th>"Phone"</th>
                        <th>"Links"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        users.get().map(|list| {
                            list.into_iter()
                                .map(|user| view! { <UserRow user=user /> })
                                .collect_view()
                        })
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn UserRow(user: Rc<TellusUser>) -> impl IntoView {
    let email = user.email().unwrap_or_default().to_string();
    let phone = user.phone().unwrap_or_default().to_string();
    let github = user.github().map(str::to_string);

    view! {
        <tr class="tellus-user-row">
            <td class="user-name">
                <UserPageLink
                    username=user.username()
                    display_text=user.full_name().to_string()
                />
            </td>
            <td class="user-email">
                {(!email.is_empty()).then(|| view! { <Linkify value=email assume_email=true /> })}
            </td>
            <td class="user-phone">{phone}</td>
            <td class="user-links">
                {github.map(|url| view! { <a href=url>"Github"</a> })}
            </td>
        </tr>
    }
}
