use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use provenance_core::{Credentials, Identity};
use provenance_infra::RequestError;
use tracing::{info, warn};

use super::events::SessionEvent;
use super::store::SessionStore;
use crate::ports::AuthPort;

/// What a protected view may do with the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Bootstrap has not settled; render nothing authoritative.
    Pending,
    Granted(Identity),
    /// Send the user to sign in, then back to `return_to`.
    RedirectToSignIn { return_to: String },
}

pub struct SessionService<A> {
    store: SessionStore,
    auth: Arc<A>,
    bootstrapped: AtomicBool,
}

impl<A: AuthPort> SessionService<A> {
    pub fn new(auth: Arc<A>) -> Self {
        Self {
            store: SessionStore::default(),
            auth,
            bootstrapped: AtomicBool::new(false),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Token first, identity second. Errors are logged and downgrade the
    /// session to anonymous; only the first call does any work.
    pub async fn bootstrap(&self) {
        if self.bootstrapped.swap(true, Ordering::SeqCst) {
            return;
        }

        let outcome: Result<Identity, RequestError> = async {
            self.auth.fetch_csrf_token().await?;
            self.auth.current_identity().await
        }
        .await;

        match outcome {
            Ok(identity) => {
                if identity.is_authenticated {
                    info!("Session restored for {}", identity.handle);
                }
                self.store.apply(SessionEvent::BootstrapSettled {
                    identity: Some(identity),
                });
            }
            Err(e) => {
                warn!("Failed to initialize session: {e}");
                self.store.apply(SessionEvent::BootstrapFailed {
                    message: e.to_string(),
                });
            }
        }
    }

    /// On failure the stored identity is left exactly as it was.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Identity, RequestError> {
        let identity = self.auth.login(credentials).await?;
        info!("Signed in as {}", identity.handle);
        self.store.apply(SessionEvent::SignedIn(identity.clone()));
        Ok(identity)
    }

    /// Local sign-out always happens, even when the server call fails.
    pub async fn sign_out(&self) {
        if let Err(e) = self.auth.logout().await {
            warn!("Server sign-out failed, clearing local session anyway: {e}");
        }
        self.store.apply(SessionEvent::SignedOut);
    }

    pub fn guard(&self, requested: &str) -> Access {
        let session = self.store.state();
        if session.loading {
            return Access::Pending;
        }
        match session.identity {
            Some(identity) if identity.is_authenticated => Access::Granted(identity),
            _ => Access::RedirectToSignIn {
                return_to: requested.to_string(),
            },
        }
    }
}
