//! Socializer Page
//!
//! Coffee Bot: a personal on/off toggle and the list of participating users.

use std::rc::Rc;

use leptos::*;

use crate::api;
use crate::components::UserPageLink;
use crate::model::user::COFFEE_BOT_TAG;
use crate::model::{TellusUser, UserCache};
use crate::router::reload_page;
use crate::state::{identity, use_session};

#[component]
pub fn SocializerPage() -> impl IntoView {
    view! {
        <div class="socializer-view">
            <CoffeeBotToggle />
            <CoffeeBotList />
        </div>
    }
}

/// The logged-in user's Coffee Bot toggle. Toggling reloads the page so
/// every view picks up the new tag state.
#[component]
fn CoffeeBotToggle() -> impl IntoView {
    let Some(username) = identity::current_username() else {
        return view! {
            <div class="coffee-bot-toggle tellus-tiny-note">
                "Please log in to enable Coffee Bot."
            </div>
        }
        .into_view();
    };

    let session = use_session();
    let user = create_rw_signal(None::<Rc<TellusUser>>);

    {
        let username = username.clone();
        create_effect(move |_| {
            let username = username.clone();
            let cache = session.users.clone();
            spawn_local(async move {
                match api::fetch_user(&username).await {
                    Ok(data) => {
                        let _ = user.try_set(Some(cache.insert(&username, data)));
                    }
                    Err(error) => {
                        logging::error!("User fetch for '{}' failed: {}", username, error);
                    }
                }
            });
        });
    }

    let on_toggle = move |_| {
        let username = username.clone();
        spawn_local(async move {
            match api::toggle_tag(&username, COFFEE_BOT_TAG).await {
                Ok(()) => reload_page(),
                Err(error) => {
                    logging::error!("Coffee Bot toggle failed: {}", error);
                }
            }
        });
    };

    view! {
        <div class="coffee-bot-toggle" on:click=on_toggle>
            {move || {
                user.get().map(|user| {
                    if user.is_coffee_bot_on() {
                        view! {
                            <span class="tellus-coffee-bot-on">"Coffee Bot is ON"</span>
                        }
                    } else {
                        view! {
                            <span class="tellus-coffee-bot-off">"Coffee Bot is OFF"</span>
                        }
                    }
                })
            }}
        </div>
    }
    .into_view()
}

/// Everyone currently participating: Coffee Bot on, or still holding a pair
/// from a previous run.
#[component]
fn CoffeeBotList() -> impl IntoView {
    let session = use_session();
    let participants = create_rw_signal(None::<Vec<Rc<TellusUser>>>);

    create_effect(move |_| {
        let cache = session.users.clone();
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(response) => {
                    cache.cache_all(&response);
                    let list: Vec<Rc<TellusUser>> = response
                        .keys()
                        .filter_map(|alias| cache.lookup(alias))
                        .filter(|user| user.is_coffee_bot_on() || user.has_coffee_pair())
                        .collect();
                    let _ = participants.try_set(Some(list));
                }
                Err(error) => {
                    logging::error!("User query failed: {}", error);
                }
            }
        });
    });

    let cache = use_session().users;

    view! {
        <div class="coffee-bot-list">
            <div class="coffee-bot-list-header">
                {move || {
                    let count = participants.get().map(|list| list.len()).unwrap_or(0);
                    format!("Coffee Bot List ({})", count)
                }}
            </div>
            {move || {
                let cache = cache.clone();
                participants.get().map(|list| {
                    list.into_iter()
                        .map(|user| view! { <CoffeeRow user=user cache=cache.clone() /> })
                        .collect_view()
                })
            }}
        </div>
    }
}

#[component]
fn CoffeeRow(user: Rc<TellusUser>, cache: UserCache) -> impl IntoView {
    let pair = user.coffee_pair().map(|alias| {
        let full_name = cache.full_name(alias);
        view! {
            <span class="coffee-row-pair">
                "Coffee Pair: "
                <UserPageLink username=alias display_text=full_name />
            </span>
        }
        .into_view()
    });
    let pair = pair.unwrap_or_else(|| {
        view! {
            <span class="coffee-row-unpaired">"Will be scheduled in next coffee run!"</span>
        }
        .into_view()
    });

    view! {
        <div class="coffee-row">
            <UserPageLink
                username=user.username()
                display_text=user.full_name().to_string()
            />
            " — "
            {pair}
        </div>
    }
}
