use std::sync::{Arc, Mutex, PoisonError};

use super::{events::SessionEvent, reducer::reduce, Session};

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<Session>>,
}

impl SessionStore {
    pub fn state(&self) -> Session {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn apply(&self, ev: SessionEvent) {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let next = reduce(guard.clone(), ev);
        *guard = next;
    }
}
