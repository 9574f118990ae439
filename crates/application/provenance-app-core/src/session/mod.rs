//! Who is signed in, and the one-time bootstrap that finds out.
//!
//! Lifecycle: `init -> ready | failed -> (sign_in | sign_out)*`. The session
//! starts with `loading = true` and settles exactly once, when
//! [`SessionService::bootstrap`] finishes. Nothing is persisted; the server's
//! session cookie is the only durable state.

pub mod events;
pub mod reducer;
pub mod service;
pub mod store;

use provenance_core::Identity;

pub use events::SessionEvent;
pub use reducer::reduce;
pub use service::{Access, SessionService};
pub use store::SessionStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootState {
    Loading,
    Ready,
    /// Bootstrap hit a network or server error and fell back to anonymous.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub identity: Option<Identity>,
    pub loading: bool,
    pub boot: BootState,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            identity: None,
            loading: true,
            boot: BootState::Loading,
        }
    }
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.identity.as_ref().is_some_and(|i| i.is_authenticated)
    }
}
