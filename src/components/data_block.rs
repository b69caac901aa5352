//! Tell data blocks
//!
//! Key/value tables for the per-source data attached to a Tell.

use leptos::*;
use serde_json::Value;

use crate::components::linkify::Linkify;
use crate::wiring::{display_description, display_name};

/// One data block: a named header (resolved through the display tables) and
/// a row per key, with values run through link classification.
#[component]
pub fn TellusDataBlock(
    #[prop(into)] header_key: String,
    data: serde_json::Map<String, Value>,
) -> impl IntoView {
    let header = display_name(&header_key, true);
    let header_title = display_description(&header_key, true);

    view! {
        <div class="tellus-data-block">
            <div class="tellus-data-header" title=header_title>{header}</div>
            <table class="tellus-data-table">
                {data.into_iter().map(|(key, value)| {
                    view! {
                        <tr class="tellus-data-item">
                            <td class="tellus-data-key">{key}</td>
                            <td class="tellus-data-value"><DataValue value=value /></td>
                        </tr>
                    }
                }).collect_view()}
            </table>
        </div>
    }
}

#[component]
fn DataValue(value: Value) -> impl IntoView {
    match value {
        Value::String(text) => view! { <Linkify value=text /> }.into_view(),
        other => other.to_string().into_view(),
    }
}
