use async_trait::async_trait;
use provenance_core::{
    Artwork, CategoryOption, Credentials, Identity, Person, PersonDetail, RecordId,
};
use provenance_infra::{QueryParams, RequestError};

#[async_trait]
pub trait AuthPort: Send + Sync + 'static {
    async fn fetch_csrf_token(&self) -> Result<(), RequestError>;
    async fn current_identity(&self) -> Result<Identity, RequestError>;
    async fn login(&self, credentials: &Credentials) -> Result<Identity, RequestError>;
    async fn logout(&self) -> Result<(), RequestError>;
}

#[async_trait]
pub trait CatalogPort: Send + Sync + 'static {
    async fn list_artworks(&self, query: &QueryParams<'_>) -> Result<Vec<Artwork>, RequestError>;
    async fn get_artwork(&self, id: RecordId) -> Result<Artwork, RequestError>;
    async fn list_persons(&self, query: &QueryParams<'_>) -> Result<Vec<Person>, RequestError>;
    async fn get_person(&self, id: RecordId) -> Result<PersonDetail, RequestError>;
    async fn list_art_types(&self) -> Result<Vec<CategoryOption>, RequestError>;
    async fn list_mediums(&self) -> Result<Vec<CategoryOption>, RequestError>;
    async fn list_event_types(&self) -> Result<Vec<CategoryOption>, RequestError>;
}
