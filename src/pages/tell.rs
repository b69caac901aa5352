//! Tell Page
//!
//! Detail view for a single Tell, in read or edit mode. Read-only Tells never
//! enter edit mode, whichever hash was used to reach them.

use leptos::*;
use serde_json::Value;

use crate::api;
use crate::components::{CategoryBadges, GoLinkCard, TagBadges, TellLinks, TellusDataBlock};
use crate::model::tell::AuditInfo;
use crate::model::Tell;
use crate::router::navigate;
use crate::wiring::{display_data_blocks, display_timestamp, PARAM_SEPARATOR, UNKNOWN_DISPLAY_NAME};

#[component]
pub fn TellPage(
    #[prop(optional_no_strip)] alias: Option<String>,
    #[prop(optional)] edit: bool,
) -> impl IntoView {
    let tell = create_rw_signal(None::<Tell>);

    if let Some(alias) = alias {
        create_effect(move |_| {
            let alias = alias.clone();
            spawn_local(async move {
                match api::fetch_tell(&alias).await {
                    Ok(fetched) => {
                        let _ = tell.try_set(Some(fetched));
                    }
                    Err(error) => {
                        logging::error!("Tell fetch for '{}' failed: {}", alias, error);
                    }
                }
            });
        });
    }

    view! {
        <div class="tell-view">
            {move || tell.get().map(|tell| view! { <TellDetail tell=tell edit=edit /> })}
        </div>
    }
}

#[component]
fn TellDetail(tell: Tell, edit: bool) -> impl IntoView {
    let editing = edit && !tell.read_only();
    let go_card = tell
        .go_url()
        .map(|_| view! { <GoLinkCard alias=tell.alias() /> });

    view! {
        <div class="tell-detail">
            <h4 class="tell-alias">{tell.alias().to_string()}</h4>
            {go_card}
            {if editing {
                view! { <TellEditForm tell=tell /> }.into_view()
            } else {
                view! { <TellReadView tell=tell edit_offered=!edit /> }.into_view()
            }}
        </div>
    }
}

#[component]
fn TellReadView(tell: Tell, edit_offered: bool) -> impl IntoView {
    let edit_href = format!("#editTell{}{}", PARAM_SEPARATOR, tell.alias());
    let edit_button = (edit_offered && !tell.read_only()).then(|| {
        view! {
            <a class="tell-edit-button btn btn-secondary" href=edit_href>"Edit"</a>
        }
    });

    let data_blocks = display_data_blocks()
        .filter_map(|key| {
            tell.data_blocks()
                .get(key)
                .and_then(Value::as_object)
                .map(|block| view! { <TellusDataBlock header_key=key data=block.clone() /> })
        })
        .collect_view();

    let related = (!tell.groups().is_empty()).then(|| {
        let query = tell.groups().join(&PARAM_SEPARATOR.to_string());
        view! { <TellLinks query=query header_text="Related Tells" /> }
    });

    let audit = tell.audit().map(audit_line);

    view! {
        <div class="tell-read">
            <CategoryBadges categories=tell.categories().to_vec() />
            <div class="tell-description">{tell.always_description().to_string()}</div>
            <TagBadges tags=tell.tags().to_vec() />
            {edit_button}
            {data_blocks}
            {related}
            {audit.map(|line| view! { <div class="tell-audit tellus-tiny-note">{line}</div> })}
        </div>
    }
}

/// One-line provenance summary from the server's audit block.
fn audit_line(audit: &AuditInfo) -> String {
    format!(
        "Tell created {} by '{}' | last modified {} by '{}'",
        display_timestamp(audit.created.as_deref()),
        audit.created_by.as_deref().unwrap_or(UNKNOWN_DISPLAY_NAME),
        display_timestamp(audit.last_modified.as_deref()),
        audit
            .last_modified_by
            .as_deref()
            .unwrap_or(UNKNOWN_DISPLAY_NAME),
    )
}

#[component]
fn TellEditForm(tell: Tell) -> impl IntoView {
    let original_alias = tell.alias().to_string();
    let (new_alias, set_new_alias) = create_signal(tell.alias().to_string());
    let (go_url, set_go_url) = create_signal(tell.go_url().unwrap_or_default().to_string());
    let (description, set_description) =
        create_signal(tell.description().unwrap_or_default().to_string());
    let (tags, set_tags) = create_signal(tell.tags().join(", "));

    let on_save = {
        let original_alias = original_alias.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();

            let request = api::UpdateTellRequest {
                alias: original_alias.clone(),
                new_alias: new_alias.get(),
                description: description.get(),
                tags: tags.get(),
                go_url: go_url.get(),
            };

            spawn_local(async move {
                match api::update_tell(&request).await {
                    Ok(saved) => {
                        let alias = saved.alias.unwrap_or(request.new_alias);
                        navigate(&format!("#t{}{}", PARAM_SEPARATOR, alias));
                    }
                    Err(error) => {
                        logging::error!("Tell update failed: {}", error);
                    }
                }
            });
        }
    };

    let cancel_href = format!("#t{}{}", PARAM_SEPARATOR, original_alias);

    let on_delete = {
        let original_alias = original_alias.clone();
        move |_| {
            let alias = original_alias.clone();
            spawn_local(async move {
                match api::delete_tell(&alias).await {
                    Ok(()) => navigate("#home"),
                    Err(error) => {
                        logging::error!("Tell delete failed: {}", error);
                    }
                }
            });
        }
    };

    view! {
        <form id="tell-edit-form" class="tell-edit" on:submit=on_save>
            <label>
                "Alias"
                <input
                    class="alias"
                    type="text"
                    prop:value=move || new_alias.get()
                    on:input=move |ev| set_new_alias.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Go URL"
                <input
                    class="go_url"
                    type="text"
                    prop:value=move || go_url.get()
                    on:input=move |ev| set_go_url.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Description"
                <input
                    class="description"
                    type="text"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Tags"
                <input
                    class="tags"
                    type="text"
                    prop:value=move || tags.get()
                    on:input=move |ev| set_tags.set(event_target_value(&ev))
                />
            </label>
            <button class="tell-save btn btn-primary" type="submit">"Save"</button>
            <a class="tell-cancel btn btn-secondary" href=cancel_href>"Cancel"</a>
            <button class="tell-delete btn btn-danger" type="button" on:click=on_delete>
                "Delete"
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_line_formats_provenance() {
        let audit = AuditInfo {
            created: Some("2023-04-05T14:30:00".to_string()),
            created_by: Some("vfh".to_string()),
            last_modified: Some("None".to_string()),
            last_modified_by: None,
        };
        assert_eq!(
            audit_line(&audit),
            "Tell created 04-05-2023 02:30 by 'vfh' | last modified No Timestamp by '???'"
        );
    }
}
