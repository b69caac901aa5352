//! DNS Page
//!
//! Active DNS links beside the full DNS entry list.

use leptos::*;

use crate::components::TellLinks;
use crate::wiring::{DNS_ACTIVE, DNS_ALL};

/// The active DNS links list, shared with the home page.
#[component]
pub fn ActiveDnsLinks() -> impl IntoView {
    view! {
        <TellLinks query=DNS_ACTIVE header_text="Active DNS Links" header_link="dns" />
    }
}

#[component]
pub fn DnsPage() -> impl IntoView {
    view! {
        <div class="dns-view row">
            <div class="left-dns-col">
                <ActiveDnsLinks />
            </div>
            <div class="right-dns-col">
                <TellLinks query=DNS_ALL header_text="All DNS Entries" header_link="dns" />
            </div>
        </div>
    }
}
