//! Identity
//!
//! The "locally remembered" username lives in a js-visible cookie; the
//! server's `/m/whoami` is the authority. When the two disagree the cookie is
//! rewritten and the page reloaded so everything picks up the new identity.

use leptos::{logging, SignalSet};
use wasm_bindgen::JsCast;

use crate::api;
use crate::router::reload_page;
use crate::state::session::SessionState;
use crate::wiring::TELLUS_APP_USERNAME;

/// js-visible cookie for the remembered user.
const LOCAL_USER: &str = "local_tellususer";

/// The locally remembered username. The app's own service account never
/// counts as a logged-in user.
pub fn current_username() -> Option<String> {
    let cookies = document_cookies()?;
    cookie_value(&cookies, LOCAL_USER).filter(|user| user != TELLUS_APP_USERNAME)
}

fn set_current_username(username: Option<&str>) {
    match username {
        Some(user) if user != TELLUS_APP_USERNAME => {
            set_cookie(&format!("{}={}; path=/", LOCAL_USER, user));
        }
        _ => {
            set_cookie(&format!("{}=; path=/; max-age=0", LOCAL_USER));
        }
    }
}

/// Reconcile the cookie with the server identity, then publish the current
/// user into session state. A mismatch rewrites the cookie and reloads.
pub async fn sync_current_user(session: &SessionState) {
    let local_user = current_username();
    match api::whoami().await {
        Ok(None) => {
            logging::log!("No user - should only be possible in a dev environment.");
        }
        Ok(Some(server_user)) => {
            if local_user.as_deref() != Some(server_user.as_str()) {
                set_current_username(Some(&server_user));
                reload_page();
                return;
            }
        }
        Err(error) => {
            logging::error!("whoami failed: {}", error);
        }
    }

    session.current_user.set(current_username());
}

/// Extract one cookie's value from a `document.cookie` string.
fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(name)?.strip_prefix('='))
        .map(str::to_string)
        .filter(|value| !value.is_empty())
}

fn document_cookies() -> Option<String> {
    let document = web_sys::window()?.document()?;
    document
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?
        .cookie()
        .ok()
}

fn set_cookie(cookie: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if let Ok(html_document) = document.dyn_into::<web_sys::HtmlDocument>() {
        let _ = html_document.set_cookie(cookie);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_value_finds_named_cookie() {
        let cookies = "other=1; local_tellususer=dray; last=x";
        assert_eq!(
            cookie_value(cookies, LOCAL_USER),
            Some("dray".to_string())
        );
    }

    #[test]
    fn cookie_value_ignores_prefix_collisions_and_empties() {
        assert_eq!(cookie_value("local_tellususer_old=dray", LOCAL_USER), None);
        assert_eq!(cookie_value("local_tellususer=", LOCAL_USER), None);
        assert_eq!(cookie_value("", LOCAL_USER), None);
    }
}
