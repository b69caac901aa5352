//! Hash Router
//!
//! Maps `window.location.hash` fragments of the form `#<view>[.<param>]` onto
//! view constructors and swaps the rendered view into the single view
//! container. The previous view's reactive scope is disposed on every
//! navigation, so a fetch that completes after the user has moved on writes
//! into dead signals instead of a detached fragment.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use leptos::{
    as_child_of_current_owner, create_rw_signal, with_owner, Disposer, Owner, RwSignal, SignalSet,
    View,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::state::session::SessionState;
use crate::wiring::PARAM_SEPARATOR;

/// A view constructor: builds a view skeleton synchronously; any server data
/// is filled in later by the view's own fetch.
pub type ViewFn = fn(Option<String>) -> View;

/// Result of routing one hash change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteOutcome {
    Rendered,
    /// No view registered for the prefix. The previously rendered view stays
    /// in place; no error is shown.
    NotFound,
}

/// Immutable mapping from hash prefixes (without the leading `#`) to view
/// constructors. Re-registering a prefix silently replaces the earlier entry.
#[derive(Default)]
pub struct RouteTable {
    routes: HashMap<&'static str, ViewFn>,
}

impl RouteTable {
    pub fn register(&mut self, prefix: &'static str, view: ViewFn) {
        self.routes.insert(prefix, view);
    }

    pub fn lookup(&self, view_name: &str) -> Option<ViewFn> {
        self.routes.get(view_name).copied()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }
}

/// Split a hash fragment into `(view name, parameter)`.
///
/// Splitting is on the first [`PARAM_SEPARATOR`] only, so dots inside the
/// parameter survive: `"#t.abc.def"` yields `("t", Some("abc.def"))`.
pub fn parse_hash(hash: &str) -> (String, Option<String>) {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    match fragment.split_once(PARAM_SEPARATOR) {
        Some((view_name, param)) => (view_name.to_string(), Some(param.to_string())),
        None => (fragment.to_string(), None),
    }
}

#[derive(Clone)]
pub struct Router {
    table: Rc<RouteTable>,
    session: SessionState,
    view: RwSignal<Option<View>>,
    active_hash: RwSignal<String>,
    owner: Option<Owner>,
    // Disposer for the current view's reactive scope
    current_scope: Rc<RefCell<Option<Disposer>>>,
}

impl Router {
    pub fn new(table: RouteTable, session: SessionState) -> Self {
        Self {
            table: Rc::new(table),
            session,
            view: create_rw_signal(None),
            active_hash: create_rw_signal(String::new()),
            owner: Owner::current(),
            current_scope: Rc::new(RefCell::new(None)),
        }
    }

    /// Subscribe to hash changes and render the current hash immediately
    /// (covers direct-link and reload navigation).
    pub fn install(&self) {
        let router = self.clone();
        let on_hash_change = Closure::<dyn FnMut()>::new(move || {
            router.show_view(&current_hash());
        });
        if let Some(window) = web_sys::window() {
            window.set_onhashchange(Some(on_hash_change.as_ref().unchecked_ref()));
        }
        on_hash_change.forget();

        self.show_view(&current_hash());
    }

    /// Route one hash value. Side effects, in order: clear transient message
    /// banners, parse, look up the view, announce it, dispose the previous
    /// view's scope, render, mark the matching nav entry active.
    pub fn show_view(&self, hash: &str) -> RouteOutcome {
        self.session.clear_messages();

        let (view_name, param) = parse_hash(hash);
        let Some(view_fn) = self.table.lookup(&view_name) else {
            return RouteOutcome::NotFound;
        };

        notify_view_change(&view_name);

        let (view, scope) = self.build_view(view_fn, param);
        *self.current_scope.borrow_mut() = scope;
        self.view.set(Some(view));

        self.active_hash.set(if hash.is_empty() {
            "#home".to_string()
        } else {
            hash.to_string()
        });
        RouteOutcome::Rendered
    }

    fn build_view(&self, view_fn: ViewFn, param: Option<String>) -> (View, Option<Disposer>) {
        match self.owner {
            Some(owner) => {
                let (view, disposer) = with_owner(owner, move || {
                    as_child_of_current_owner(move |param| view_fn(param))(param)
                });
                (view, Some(disposer))
            }
            None => (view_fn(param), None),
        }
    }

    /// The currently rendered view, for the view container.
    pub fn view_signal(&self) -> RwSignal<Option<View>> {
        self.view
    }

    /// The full hash whose nav entry should be marked active.
    pub fn active_hash(&self) -> RwSignal<String> {
        self.active_hash
    }
}

/// The router, from context.
pub fn use_router() -> Router {
    leptos::use_context::<Router>().expect("Router not found")
}

/// Announce a view change for observers such as analytics or debug tooling.
#[cfg(target_arch = "wasm32")]
fn notify_view_change(view_name: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let init = web_sys::CustomEventInit::new();
    init.set_detail(&JsValue::from_str(view_name));
    if let Ok(event) = web_sys::CustomEvent::new_with_event_init_dict("router.addView", &init) {
        let _ = window.dispatch_event(&event);
    }
}

/// Off-wasm there is no window to dispatch browser events to;
/// `web_sys::window()` panics there rather than returning `None`.
#[cfg(not(target_arch = "wasm32"))]
fn notify_view_change(_view_name: &str) {}

pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

/// Navigate by mutating the location hash; the hashchange subscription picks
/// this up and routes it.
pub fn navigate(hash: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(hash);
    }
}

/// Full page reload, resetting all client state.
pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::{create_runtime, IntoView, SignalGetUntracked};

    fn stub_view(_param: Option<String>) -> View {
        ().into_view()
    }

    #[test]
    fn parse_hash_without_param() {
        assert_eq!(parse_hash("#home"), ("home".to_string(), None));
        assert_eq!(parse_hash("#t"), ("t".to_string(), None));
    }

    #[test]
    fn parse_hash_splits_on_first_separator_only() {
        assert_eq!(
            parse_hash("#t.abc.def"),
            ("t".to_string(), Some("abc.def".to_string()))
        );
    }

    #[test]
    fn parse_hash_empty_and_bare_hash_map_to_home_route() {
        assert_eq!(parse_hash(""), (String::new(), None));
        assert_eq!(parse_hash("#"), (String::new(), None));
    }

    #[test]
    fn parse_hash_preserves_dashes_in_param() {
        assert_eq!(
            parse_hash("#l.coffee-bot"),
            ("l".to_string(), Some("coffee-bot".to_string()))
        );
    }

    #[test]
    fn route_table_last_registration_wins() {
        fn other_view(_param: Option<String>) -> View {
            ().into_view()
        }

        let runtime = create_runtime();
        let mut table = RouteTable::default();
        table.register("t", stub_view);
        table.register("t", other_view);
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("t"), Some(other_view as ViewFn));
        runtime.dispose();
    }

    #[test]
    fn route_table_lookup_is_exact() {
        let runtime = create_runtime();
        let mut table = RouteTable::default();
        table.register("tell", stub_view);
        assert!(table.lookup("tell").is_some());
        assert!(table.lookup("tel").is_none());
        assert!(table.lookup("tells").is_none());
        runtime.dispose();
    }

    #[test]
    fn unmatched_route_leaves_previous_view_untouched() {
        let runtime = create_runtime();
        let session = SessionState::new();
        let mut table = RouteTable::default();
        table.register("home", stub_view);
        let router = Router::new(table, session);

        assert_eq!(router.show_view("#home"), RouteOutcome::Rendered);
        assert!(router.view_signal().get_untracked().is_some());

        assert_eq!(router.show_view("#no-such-view"), RouteOutcome::NotFound);
        assert!(router.view_signal().get_untracked().is_some());
        runtime.dispose();
    }

    #[test]
    fn routing_clears_transient_messages() {
        let runtime = create_runtime();
        let session = SessionState::new();
        session.info_message("stale banner");
        let router = Router::new(RouteTable::default(), session.clone());

        router.show_view("#anything");
        assert!(session.messages.get_untracked().is_empty());
        runtime.dispose();
    }

    #[test]
    fn empty_hash_marks_home_active() {
        let runtime = create_runtime();
        let mut table = RouteTable::default();
        table.register("", stub_view);
        let router = Router::new(table, SessionState::new());

        router.show_view("");
        assert_eq!(router.active_hash().get_untracked(), "#home");
        runtime.dispose();
    }
}
