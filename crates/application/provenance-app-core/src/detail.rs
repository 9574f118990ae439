use provenance_infra::RequestError;
use tracing::warn;

/// Outcome of loading a single record for a detail page.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView<T> {
    Loaded(T),
    NotFound,
    Failed(String),
}

impl<T> From<Result<T, RequestError>> for DetailView<T> {
    fn from(res: Result<T, RequestError>) -> Self {
        match res {
            Ok(record) => DetailView::Loaded(record),
            Err(e) if e.is_not_found() => DetailView::NotFound,
            Err(e) => {
                warn!("Failed to load record: {e}");
                DetailView::Failed(e.to_string())
            }
        }
    }
}
