//! Tools Page

use leptos::*;

use crate::components::TellLinks;
use crate::wiring::TOOLS;

#[component]
pub fn ToolsPage() -> impl IntoView {
    view! {
        <div class="tools-view">
            <TellLinks query=TOOLS header_text="Tools" />
        </div>
    }
}
