use std::sync::Arc;

use async_trait::async_trait;
use provenance_core::{
    Artwork, CategoryOption, CategoryOptions, DisplayName, FilterKey, FilterState, Person,
};
use provenance_infra::RequestError;
use tracing::warn;

use crate::ports::CatalogPort;

/// What a list view fetches, and which categorical filters it understands.
#[async_trait]
pub trait ListSource: Send + Sync + 'static {
    type Item: DisplayName + Clone + Send + Sync + 'static;

    /// Categorical filters this view reads from and writes to the location.
    const KEYS: &'static [FilterKey];

    /// Option lists for the view's filters. Failed lists come back empty.
    async fn fetch_options(&self) -> CategoryOptions;

    async fn fetch_results(&self, filter: &FilterState) -> Result<Vec<Self::Item>, RequestError>;
}

fn or_empty(what: &str, res: Result<Vec<CategoryOption>, RequestError>) -> Vec<CategoryOption> {
    res.unwrap_or_else(|e| {
        warn!("Failed to fetch {what}: {e}");
        Vec::new()
    })
}

pub struct ArtworkList<C> {
    catalog: Arc<C>,
}

impl<C> ArtworkList<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl<C: CatalogPort> ListSource for ArtworkList<C> {
    type Item = Artwork;

    const KEYS: &'static [FilterKey] = &[FilterKey::ArtType, FilterKey::Medium];

    async fn fetch_options(&self) -> CategoryOptions {
        let (art_types, mediums) =
            futures::join!(self.catalog.list_art_types(), self.catalog.list_mediums());
        CategoryOptions {
            art_types: or_empty("art types", art_types),
            mediums: or_empty("mediums", mediums),
            event_types: Vec::new(),
        }
    }

    async fn fetch_results(&self, filter: &FilterState) -> Result<Vec<Artwork>, RequestError> {
        self.catalog.list_artworks(&filter.query_params()).await
    }
}

pub struct PersonList<C> {
    catalog: Arc<C>,
}

impl<C> PersonList<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl<C: CatalogPort> ListSource for PersonList<C> {
    type Item = Person;

    const KEYS: &'static [FilterKey] = &[FilterKey::EventType];

    async fn fetch_options(&self) -> CategoryOptions {
        let event_types = self.catalog.list_event_types().await;
        CategoryOptions {
            event_types: or_empty("event types", event_types),
            ..Default::default()
        }
    }

    async fn fetch_results(&self, filter: &FilterState) -> Result<Vec<Person>, RequestError> {
        self.catalog.list_persons(&filter.query_params()).await
    }
}
