use super::events::SessionEvent;
use super::{BootState, Session};

pub fn reduce(mut state: Session, ev: SessionEvent) -> Session {
    match ev {
        SessionEvent::BootstrapSettled { identity } => {
            state.identity = identity.filter(|i| i.is_authenticated);
            state.loading = false;
            state.boot = BootState::Ready;
        }

        SessionEvent::BootstrapFailed { message } => {
            state.identity = None;
            state.loading = false;
            state.boot = BootState::Failed(message);
        }

        SessionEvent::SignedIn(identity) => state.identity = Some(identity),
        SessionEvent::SignedOut => state.identity = None,
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use provenance_core::Identity;

    fn curator(authenticated: bool) -> Identity {
        Identity {
            handle: "curator".into(),
            is_authenticated: authenticated,
            ..Default::default()
        }
    }

    #[test]
    fn settled_with_anonymous_payload_stores_nothing() {
        let s = reduce(
            Session::default(),
            SessionEvent::BootstrapSettled {
                identity: Some(curator(false)),
            },
        );
        assert_eq!(s.identity, None);
        assert!(!s.loading);
        assert_eq!(s.boot, BootState::Ready);
    }

    #[test]
    fn failure_clears_loading() {
        let s = reduce(
            Session::default(),
            SessionEvent::BootstrapFailed {
                message: "offline".into(),
            },
        );
        assert!(!s.loading);
        assert_eq!(s.boot, BootState::Failed("offline".into()));
    }

    #[test]
    fn sign_out_drops_identity() {
        let s = reduce(Session::default(), SessionEvent::SignedIn(curator(true)));
        assert!(s.is_authenticated());
        let s = reduce(s, SessionEvent::SignedOut);
        assert!(!s.is_authenticated());
    }
}
