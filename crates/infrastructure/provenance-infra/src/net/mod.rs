use std::sync::Arc;

use provenance_core::{
    Artwork, CategoryOption, Credentials, Identity, Person, PersonDetail, RecordId,
};
use reqwest::cookie::Jar;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

mod csrf;
mod error;

pub use csrf::CsrfLayer;
pub use error::RequestError;

/// Optional query parameters. `None` and empty values are dropped.
pub type QueryParams<'a> = [(&'a str, Option<String>)];

/// HTTP client sharing `jar` as its cookie store.
pub fn default_http_client(jar: Arc<Jar>) -> reqwest::Result<Client> {
    Client::builder()
        .cookie_provider(jar)
        .user_agent(provenance_config::USER_AGENT)
        .build()
}

/// Typed access to the archive API.
///
/// All paths are relative to the base URL (which ends in `/api/`). Mutating
/// requests go through [`CsrfLayer`] before they are sent.
#[derive(Clone)]
pub struct ArchiveClient {
    client: Client,
    base: Url,
    csrf: CsrfLayer,
}

impl ArchiveClient {
    pub fn new(base_url: &str) -> Result<Self, RequestError> {
        let jar = Arc::new(Jar::default());
        let client = default_http_client(jar.clone())?;
        Self::with_client(client, jar, base_url)
    }

    /// Use an existing client. `jar` must be the cookie store `client` was
    /// built with, otherwise tokens set by the server are never seen.
    pub fn with_client(client: Client, jar: Arc<Jar>, base_url: &str) -> Result<Self, RequestError> {
        let normalized = provenance_config::normalize_base_url(base_url);
        let base = Url::parse(&normalized)
            .map_err(|e| RequestError::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(Self {
            client,
            base,
            csrf: CsrfLayer::new(jar),
        })
    }

    fn endpoint(&self, path: &str, query: &QueryParams<'_>) -> Result<Url, RequestError> {
        let mut url = self
            .base
            .join(path)
            .map_err(|e| RequestError::InvalidUrl(format!("{path}: {e}")))?;

        let present: Vec<(&str, &str)> = query
            .iter()
            .filter_map(|(k, v)| {
                v.as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| (*k, v))
            })
            .collect();

        // Appending nothing would still leave a bare `?` behind.
        if !present.is_empty() {
            url.query_pairs_mut().extend_pairs(present);
        }
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams<'_>,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, RequestError> {
        let url = self.endpoint(path, query)?;
        let mut request = self.client.request(method, url).build()?;
        if let Some(body) = body {
            request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *request.body_mut() = Some(body.into());
        }
        self.csrf.apply(&mut request);

        debug!("{} {}", request.method(), request.url());
        let resp = self.client.execute(request).await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            return Err(RequestError::from_response(status, &bytes));
        }
        Ok(bytes.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams<'_>,
    ) -> Result<T, RequestError> {
        let bytes = self.send(Method::GET, path, query, None).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get_results<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams<'_>,
    ) -> Result<Vec<T>, RequestError> {
        let bytes = self.send(Method::GET, path, query, None).await?;
        unwrap_results(&bytes)
    }

    /// Ask the server to set the anti-forgery cookie.
    pub async fn fetch_csrf_token(&self) -> Result<(), RequestError> {
        self.send(Method::GET, "auth/csrf/", &[], None).await?;
        Ok(())
    }

    pub async fn current_identity(&self) -> Result<Identity, RequestError> {
        self.get_json("auth/me/", &[]).await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Identity, RequestError> {
        let body = serde_json::to_vec(credentials)?;
        let bytes = self
            .send(Method::POST, "auth/login/", &[], Some(body))
            .await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn logout(&self) -> Result<(), RequestError> {
        self.send(Method::POST, "auth/logout/", &[], None).await?;
        Ok(())
    }

    pub async fn list_artworks(&self, query: &QueryParams<'_>) -> Result<Vec<Artwork>, RequestError> {
        self.get_results("artworks/", query).await
    }

    pub async fn get_artwork(&self, id: RecordId) -> Result<Artwork, RequestError> {
        self.get_json(&format!("artworks/{id}/"), &[]).await
    }

    pub async fn list_persons(&self, query: &QueryParams<'_>) -> Result<Vec<Person>, RequestError> {
        self.get_results("persons/", query).await
    }

    pub async fn get_person(&self, id: RecordId) -> Result<PersonDetail, RequestError> {
        self.get_json(&format!("persons/{id}/"), &[]).await
    }

    pub async fn list_art_types(&self) -> Result<Vec<CategoryOption>, RequestError> {
        self.get_results("art-types/", &[]).await
    }

    pub async fn list_mediums(&self) -> Result<Vec<CategoryOption>, RequestError> {
        self.get_results("mediums/", &[]).await
    }

    pub async fn list_event_types(&self) -> Result<Vec<CategoryOption>, RequestError> {
        self.get_results("event-types/", &[]).await
    }
}

/// Pull `results` out of a list envelope. A body without the envelope is an
/// empty list, not an error.
fn unwrap_results<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, RequestError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    match value {
        serde_json::Value::Object(mut map) => match map.remove("results") {
            Some(results @ serde_json::Value::Array(_)) => Ok(serde_json::from_value(results)?),
            _ => Ok(Vec::new()),
        },
        _ => Ok(Vec::new()),
    }
}
