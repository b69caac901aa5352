//! Sources Page
//!
//! Status list for the server's data sources, with per-source and load-all
//! triggers. Loads run server-side in the background; the page only reports
//! that the request went out.

use leptos::*;

use crate::api::{self, Source};
use crate::state::use_session;
use crate::wiring::display_timestamp;

#[component]
pub fn SourcesPage() -> impl IntoView {
    let session = use_session();
    let sources = create_rw_signal(None::<Vec<(String, Source)>>);

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_sources().await {
                Ok(list) => {
                    let _ = sources.try_set(Some(list));
                }
                Err(error) => {
                    logging::error!("Source query failed: {}", error);
                }
            }
        });
    });

    let on_load_all = {
        let session = session.clone();
        move |_| {
            session.info_message("Loading all sources...");
            spawn_local(async move {
                if let Err(error) = api::load_all_sources().await {
                    logging::error!("Source load failed: {}", error);
                }
            });
        }
    };

    view! {
        <div class="sources-view">
            <button class="sources-load-all btn btn-secondary" on:click=on_load_all>
                "Load All"
            </button>
            {move || {
                sources.get().map(|list| {
                    list.into_iter()
                        .map(|(id, source)| view! { <SourceItem id=id source=source /> })
                        .collect_view()
                })
            }}
        </div>
    }
}

#[component]
fn SourceItem(id: String, source: Source) -> impl IntoView {
    let session = use_session();
    let info = source_info_line(&source);

    let on_load = {
        let id = id.clone();
        move |_| {
            let id = id.clone();
            session.info_message(&format!("Loading '{}'...", id));
            spawn_local(async move {
                if let Err(error) = api::load_source(&id).await {
                    logging::error!("Source load failed: {}", error);
                }
            });
        }
    };

    view! {
        <div class="tellus-source">
            <span class="source-name" title=source.description.clone()>
                {source.display_name.clone()}
            </span>
            <button class="source-load btn btn-sm" on:click=on_load>"Load"</button>
            <div class="source-info tellus-tiny-note">{info}</div>
        </div>
    }
}

fn source_info_line(source: &Source) -> String {
    format!(
        "{}, {}  [\"{}\"]",
        source.status,
        display_timestamp(source.last_run.as_deref()),
        source.last_run_message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_line_includes_status_timestamp_and_message() {
        let source = Source {
            display_name: "DNS".to_string(),
            description: "DNS entries".to_string(),
            status: "OK".to_string(),
            last_run: Some("2023-04-05T14:30:00".to_string()),
            last_run_message: "Loaded 42 entries".to_string(),
        };
        assert_eq!(
            source_info_line(&source),
            "OK, 04-05-2023 02:30  [\"Loaded 42 entries\"]"
        );
    }

    #[test]
    fn info_line_degrades_for_never_run_sources() {
        let source = Source {
            status: "NEVER RUN".to_string(),
            ..Source::default()
        };
        assert_eq!(source_info_line(&source), "NEVER RUN, No Timestamp  [\"\"]");
    }
}
