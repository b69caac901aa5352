//! Link Classification
//!
//! Decides whether a raw value renders as a hyperlink, a `mailto:` link, or
//! plain text. Classification is pure; the component applies it against the
//! current page origin.

use leptos::*;

/// Reserved scheme marker the server uses for internal URLs.
pub const INTERNAL_SCHEME: &str = "tellus:";

/// Values ending with this suffix are treated as email addresses.
pub const EMAIL_DOMAIN_SUFFIX: &str = "@example.com";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Linkified {
    Url(String),
    Email(String),
    Text(String),
}

/// Classify a raw value, ordered rules:
/// 1. an internal-scheme value is rewritten onto `origin` first;
/// 2. `assume_link`, or the value starts with `http` — hyperlink;
/// 3. `assume_email`, or the value ends with the email suffix — `mailto:`;
/// 4. otherwise the original text, unchanged.
pub fn linkify(value: &str, origin: &str, assume_link: bool, assume_email: bool) -> Linkified {
    let display_url = match value.strip_prefix(INTERNAL_SCHEME) {
        Some(rest) => format!("{}{}", origin, rest),
        None => value.to_string(),
    };

    if assume_link || display_url.starts_with("http") {
        Linkified::Url(display_url)
    } else if assume_email || display_url.ends_with(EMAIL_DOMAIN_SUFFIX) {
        Linkified::Email(display_url)
    } else {
        Linkified::Text(value.to_string())
    }
}

/// Convenience classification that always treats the value as an email.
pub fn linkify_email(value: &str, origin: &str) -> Linkified {
    linkify(value, origin, false, true)
}

/// The current page origin, for internal-URL rewriting and Go URLs.
pub fn page_origin() -> String {
    web_sys::window()
        .map(|window| window.origin())
        .unwrap_or_default()
}

/// Render a value as a link, a mailto link, or plain text.
#[component]
pub fn Linkify(
    #[prop(into)] value: String,
    #[prop(optional)] assume_link: bool,
    #[prop(optional)] assume_email: bool,
) -> impl IntoView {
    match linkify(&value, &page_origin(), assume_link, assume_email) {
        Linkified::Url(url) => view! {
            <a class="tellus-generic-url" href=url>{value}</a>
        }
        .into_view(),
        Linkified::Email(email) => view! {
            <a class="tellus-generic-email" href=format!("mailto:{}", email)>{value}</a>
        }
        .into_view(),
        Linkified::Text(text) => text.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "http://tellus.example.com";

    #[test]
    fn http_values_become_hyperlinks() {
        assert_eq!(
            linkify("http://example.com", ORIGIN, false, false),
            Linkified::Url("http://example.com".to_string())
        );
        assert_eq!(
            linkify("https://example.com", ORIGIN, false, false),
            Linkified::Url("https://example.com".to_string())
        );
    }

    #[test]
    fn internal_scheme_rewrites_to_origin_before_classifying() {
        assert_eq!(
            linkify("tellus:/abc", ORIGIN, false, false),
            Linkified::Url("http://tellus.example.com/abc".to_string())
        );
    }

    #[test]
    fn matching_email_suffix_becomes_mailto() {
        assert_eq!(
            linkify("x@example.com", ORIGIN, false, false),
            Linkified::Email("x@example.com".to_string())
        );
    }

    #[test]
    fn foreign_email_domains_stay_plain_text() {
        assert_eq!(
            linkify("foo@elsewhere.org", ORIGIN, false, false),
            Linkified::Text("foo@elsewhere.org".to_string())
        );
    }

    #[test]
    fn assume_flags_override_pattern_checks() {
        assert_eq!(
            linkify("internal-dashboard", ORIGIN, true, false),
            Linkified::Url("internal-dashboard".to_string())
        );
        assert_eq!(
            linkify_email("foo@elsewhere.org", ORIGIN),
            Linkified::Email("foo@elsewhere.org".to_string())
        );
    }

    #[test]
    fn plain_text_returned_unchanged() {
        assert_eq!(
            linkify("just some words", ORIGIN, false, false),
            Linkified::Text("just some words".to_string())
        );
    }
}
