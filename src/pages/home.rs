//! Home Page
//!
//! Three columns: tools, go links, and active DNS entries.

use leptos::*;

use crate::components::TellLinks;
use crate::pages::dns::ActiveDnsLinks;
use crate::state::use_session;
use crate::wiring::TOOLS;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    // Warn loudly when the server is running on throwaway persistence.
    {
        let session = session.clone();
        create_effect(move |_| {
            if let Some(status) = session.status.get() {
                if status.local_persistence {
                    session.danger_message(
                        "Welcome to Tellus.  WARNING: currently using local persistence - \
                         data will not persist across deployments.",
                    );
                }
            }
        });
    }

    view! {
        <div class="home-view row">
            <div class="left-home-col">
                <TellLinks query=TOOLS header_text="Tools" header_link="tools" />
            </div>
            <div class="center-home-col">
                <TellLinks
                    query="go"
                    header_text="Go Links [+]"
                    tooltip="Click here to create a Go link"
                />
            </div>
            <div class="right-home-col">
                <ActiveDnsLinks />
            </div>
        </div>
    }
}
