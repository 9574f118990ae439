use std::sync::{Arc, Mutex, PoisonError};

/// The address-bar query of the view being shown.
pub trait LocationPort: Send + Sync + 'static {
    /// Current query string, without the leading `?`.
    fn query(&self) -> String;

    /// Swap the query in place; must not add a history entry.
    fn replace_query(&self, query: &str);
}

#[derive(Debug, Default)]
struct LocationInner {
    path: String,
    query: String,
    history_len: usize,
    replacements: usize,
}

/// In-process location for headless use. Clones share the same address.
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    inner: Arc<Mutex<LocationInner>>,
}

impl MemoryLocation {
    pub fn new(path: &str, query: &str) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LocationInner {
                path: path.to_string(),
                query: query.strip_prefix('?').unwrap_or(query).to_string(),
                history_len: 1,
                replacements: 0,
            })),
        }
    }

    fn with_inner<R>(&self, f: impl FnOnce(&mut LocationInner) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Path plus query, the form a sign-in redirect hands back.
    pub fn href(&self) -> String {
        self.with_inner(|l| {
            if l.query.is_empty() {
                l.path.clone()
            } else {
                format!("{}?{}", l.path, l.query)
            }
        })
    }

    /// Navigate to a new address, growing history.
    pub fn push(&self, path: &str, query: &str) {
        self.with_inner(|l| {
            l.path = path.to_string();
            l.query = query.strip_prefix('?').unwrap_or(query).to_string();
            l.history_len += 1;
        });
    }

    pub fn history_len(&self) -> usize {
        self.with_inner(|l| l.history_len)
    }

    pub fn replacements(&self) -> usize {
        self.with_inner(|l| l.replacements)
    }
}

impl LocationPort for MemoryLocation {
    fn query(&self) -> String {
        self.with_inner(|l| l.query.clone())
    }

    fn replace_query(&self, query: &str) {
        self.with_inner(|l| {
            l.query = query.to_string();
            l.replacements += 1;
        });
    }
}
