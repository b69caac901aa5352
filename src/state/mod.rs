//! State Management
//!
//! Session-wide reactive state and the browser-cookie identity handling.

pub mod identity;
pub mod session;

pub use session::{provide_session_state, use_session, SessionState, TellusStatus};
