use async_trait::async_trait;
use provenance_core::{
    Artwork, CategoryOption, Credentials, Identity, Person, PersonDetail, RecordId,
};
use provenance_infra::{ArchiveClient, QueryParams, RequestError};

use crate::ports::{AuthPort, CatalogPort};

#[async_trait]
impl AuthPort for ArchiveClient {
    async fn fetch_csrf_token(&self) -> Result<(), RequestError> {
        ArchiveClient::fetch_csrf_token(self).await
    }

    async fn current_identity(&self) -> Result<Identity, RequestError> {
        ArchiveClient::current_identity(self).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<Identity, RequestError> {
        ArchiveClient::login(self, credentials).await
    }

    async fn logout(&self) -> Result<(), RequestError> {
        ArchiveClient::logout(self).await
    }
}

#[async_trait]
impl CatalogPort for ArchiveClient {
    async fn list_artworks(&self, query: &QueryParams<'_>) -> Result<Vec<Artwork>, RequestError> {
        ArchiveClient::list_artworks(self, query).await
    }

    async fn get_artwork(&self, id: RecordId) -> Result<Artwork, RequestError> {
        ArchiveClient::get_artwork(self, id).await
    }

    async fn list_persons(&self, query: &QueryParams<'_>) -> Result<Vec<Person>, RequestError> {
        ArchiveClient::list_persons(self, query).await
    }

    async fn get_person(&self, id: RecordId) -> Result<PersonDetail, RequestError> {
        ArchiveClient::get_person(self, id).await
    }

    async fn list_art_types(&self) -> Result<Vec<CategoryOption>, RequestError> {
        ArchiveClient::list_art_types(self).await
    }

    async fn list_mediums(&self) -> Result<Vec<CategoryOption>, RequestError> {
        ArchiveClient::list_mediums(self).await
    }

    async fn list_event_types(&self) -> Result<Vec<CategoryOption>, RequestError> {
        ArchiveClient::list_event_types(self).await
    }
}
