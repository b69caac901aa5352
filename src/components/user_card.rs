//! User cards
//!
//! Display cards for a single Tellus user: contact card, external links, and
//! the Coffee Bot pairing card.

use std::rc::Rc;

use leptos::*;

use crate::model::user::tellus_user_url;
use crate::model::TellusUser;

/// Link to a user's page, displaying the full name when given one.
#[component]
pub fn UserPageLink(
    #[prop(into)] username: String,
    #[prop(optional, into)] display_text: Option<String>,
) -> impl IntoView {
    let text = display_text.unwrap_or_else(|| username.clone());

    view! {
        <a class="tellus-user-page-link" href=tellus_user_url(&username)>{text}</a>
    }
}

/// Contact card: full name, phone, email.
#[component]
pub fn UserCard(user: Rc<TellusUser>) -> impl IntoView {
    let email = user.email().unwrap_or_default().to_string();
    let avatar = user.avatar_url().map(str::to_string);

    view! {
        <div class="tellus-user-card">
            {avatar.map(|url| view! { <img class="user-card-avatar" src=url /> })}
            <div class="user-card-full-name">{user.full_name().to_string()}</div>
            <div class="user-card-phone">{user.phone().unwrap_or_default().to_string()}</div>
            <a class="user-card-email" href=format!("mailto:{}", email)>{email.clone()}</a>
        </div>
    }
}

/// External links for a user: homepage and Github (when known).
#[component]
pub fn UserLinksCard(user: Rc<TellusUser>) -> impl IntoView {
    let confluence = user.confluence().unwrap_or_default().to_string();
    let github = user.github().map(str::to_string);

    view! {
        <ul class="tellus-user-links">
            <li><a class="user-card-homepage" href=confluence>"Homepage"</a></li>
            {github.map(|url| view! {
                <li><a class="user-card-github" href=url>"Github"</a></li>
            })}
        </ul>
    }
}

/// Coffee Bot pairing card: the current pair and recent history.
#[component]
pub fn CoffeeBotCard(user: Rc<TellusUser>) -> impl IntoView {
    let pair = user.coffee_pair().map(str::to_string);
    let history = user.coffee_history(5).join(", ");

    view! {
        <div class="tellus-coffee-bot-card">
            <div class="coffee-pair">
                {pair.map(|alias| view! { <UserPageLink username=alias /> })}
            </div>
            <div class="coffee-history tellus-tiny-note">
                {format!("Last 5: {}", history)}
            </div>
        </div>
    }
}
