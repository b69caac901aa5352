//! App shell
//!
//! Top-level component: session state, startup fetches, the route table, and
//! the nav/messages/view-container/footer layout.

use leptos::*;

use crate::api;
use crate::components::{Messages, Nav};
use crate::pages::{
    DebugPage, DnsPage, GoPage, HomePage, SearchPage, SocializerPage, SourcesPage, TellPage,
    TellsPage, ToolsPage, UserPage, UsersPage,
};
use crate::router::{RouteTable, Router};
use crate::state::{identity, provide_session_state};

#[component]
pub fn App() -> impl IntoView {
    let session = provide_session_state();

    {
        let session = session.clone();
        spawn_local(async move {
            match api::tellus_status().await {
                Ok(status) => session.status.set(Some(status)),
                Err(error) => logging::error!("Status fetch failed: {}", error),
            }
        });
    }
    {
        let session = session.clone();
        spawn_local(async move {
            identity::sync_current_user(&session).await;
        });
    }

    let router = Router::new(routes(), session.clone());
    provide_context(router.clone());
    router.install();

    let view = router.view_signal();
    let version = move || {
        session
            .status
            .get()
            .map(|status| format!("Tellus v{}", status.tellus_version))
    };

    view! {
        <Nav />
        <Messages />
        <main class="view-container">{move || view.get()}</main>
        <footer class="tellus-footer tellus-tiny-note">{version}</footer>
    }
}

/// The route table. Every view gets a long name; the single-letter aliases
/// match the server's command routes so links can be short.
fn routes() -> RouteTable {
    let mut table = RouteTable::default();
    table.register("", home);
    table.register("home", home);
    table.register("g", go);
    table.register("go", go);
    table.register("l", tells);
    table.register("tells", tells);
    table.register("t", tell_read);
    table.register("tell", tell_read);
    table.register("editTell", tell_edit);
    table.register("e", search);
    table.register("search", search);
    table.register("u", user);
    table.register("who", users);
    table.register("social", socializer);
    table.register("sources", sources);
    table.register("dns", dns);
    table.register("tools", tools);
    table.register("debug", debug);
    table
}

fn home(_param: Option<String>) -> View {
    view! { <HomePage /> }.into_view()
}

fn go(param: Option<String>) -> View {
    view! { <GoPage alias=param /> }.into_view()
}

fn tells(param: Option<String>) -> View {
    view! { <TellsPage query=param /> }.into_view()
}

fn tell_read(param: Option<String>) -> View {
    view! { <TellPage alias=param /> }.into_view()
}

fn tell_edit(param: Option<String>) -> View {
    view! { <TellPage alias=param edit=true /> }.into_view()
}

fn search(param: Option<String>) -> View {
    view! { <SearchPage query=param /> }.into_view()
}

fn user(param: Option<String>) -> View {
    view! { <UserPage alias=param /> }.into_view()
}

fn users(_param: Option<String>) -> View {
    view! { <UsersPage /> }.into_view()
}

fn socializer(_param: Option<String>) -> View {
    view! { <SocializerPage /> }.into_view()
}

fn sources(_param: Option<String>) -> View {
    view! { <SourcesPage /> }.into_view()
}

fn dns(_param: Option<String>) -> View {
    view! { <DnsPage /> }.into_view()
}

fn tools(_param: Option<String>) -> View {
    view! { <ToolsPage /> }.into_view()
}

fn debug(_param: Option<String>) -> View {
    view! { <DebugPage /> }.into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    #[test]
    fn every_view_is_reachable_by_long_and_short_names() {
        let runtime = create_runtime();
        let table = routes();

        for prefix in [
            "", "home", "g", "go", "l", "tells", "t", "tell", "editTell", "e", "search", "u",
            "who", "social", "sources", "dns", "tools", "debug",
        ] {
            assert!(table.lookup(prefix).is_some(), "missing route: '{}'", prefix);
        }
        assert!(table.lookup("nope").is_none());
        runtime.dispose();
    }

    #[test]
    fn aliases_share_their_view_constructor() {
        let runtime = create_runtime();
        let table = routes();
        assert_eq!(table.lookup("t"), table.lookup("tell"));
        assert_eq!(table.lookup("l"), table.lookup("tells"));
        assert_ne!(table.lookup("tell"), table.lookup("editTell"));
        runtime.dispose();
    }
}
