//! Session State
//!
//! Reactive state shared across the component tree for one page session:
//! the server status, the locally remembered user, the transient message
//! banners, and the user cache.

use leptos::{create_rw_signal, provide_context, use_context, RwSignal, SignalSet, SignalUpdate};

use crate::model::UserCache;

/// Response of `/x/tellus-status`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct TellusStatus {
    #[serde(rename = "localPersistence")]
    pub local_persistence: bool,
    #[serde(rename = "tellusVersion")]
    pub tellus_version: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Danger,
}

/// One transient banner in the message row. Banners live until the next
/// navigation clears them or a flow replaces them.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub level: MessageLevel,
    pub text: String,
}

#[derive(Clone)]
pub struct SessionState {
    /// Server status, fetched once at startup.
    pub status: RwSignal<Option<TellusStatus>>,
    /// The locally remembered username, if any.
    pub current_user: RwSignal<Option<String>>,
    /// Transient message banners.
    pub messages: RwSignal<Vec<Message>>,
    /// Users already fetched this session.
    pub users: UserCache,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            status: create_rw_signal(None),
            current_user: create_rw_signal(None),
            messages: create_rw_signal(Vec::new()),
            users: UserCache::default(),
        }
    }

    /// Show an informational banner, replacing any banners already shown.
    pub fn info_message(&self, text: &str) {
        self.show_message(MessageLevel::Info, text, true);
    }

    /// Show a danger banner, replacing any banners already shown.
    pub fn danger_message(&self, text: &str) {
        self.show_message(MessageLevel::Danger, text, true);
    }

    pub fn show_message(&self, level: MessageLevel, text: &str, clear_priors: bool) {
        let message = Message {
            level,
            text: text.to_string(),
        };
        self.messages.update(|messages| {
            if clear_priors {
                messages.clear();
            }
            messages.push(message);
        });
    }

    pub fn clear_messages(&self) {
        self.messages.set(Vec::new());
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide session state to the component tree.
pub fn provide_session_state() -> SessionState {
    let state = SessionState::new();
    provide_context(state.clone());
    state
}

pub fn use_session() -> SessionState {
    use_context::<SessionState>().expect("SessionState not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::{create_runtime, SignalGetUntracked};

    #[test]
    fn info_message_replaces_priors() {
        let runtime = create_runtime();
        let session = SessionState::new();
        session.info_message("first");
        session.info_message("second");

        let messages = session.messages.get_untracked();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, "second");
        assert_eq!(messages[0].level, MessageLevel::Info);
        runtime.dispose();
    }

    #[test]
    fn show_message_can_stack_banners() {
        let runtime = create_runtime();
        let session = SessionState::new();
        session.danger_message("warning");
        session.show_message(MessageLevel::Info, "also this", false);

        assert_eq!(session.messages.get_untracked().len(), 2);
        session.clear_messages();
        assert!(session.messages.get_untracked().is_empty());
        runtime.dispose();
    }
}
