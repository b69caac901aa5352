//! Debug Page
//!
//! Manual smoke view for the shared links component.

use leptos::*;

use crate::components::TellLinks;

#[component]
pub fn DebugPage() -> impl IntoView {
    view! {
        <div class="debug-view">
            <TellLinks query="FAKE" header_text="TEST HEADER NO LINK" />
            <TellLinks
                query="FAKE"
                header_text="TEST HEADER LINK"
                header_link="http://github.com/aquanauts/tellus"
            />
        </div>
    }
}
