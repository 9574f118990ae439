use std::sync::Arc;

use percent_encoding::percent_decode_str;
use reqwest::cookie::CookieStore;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Method, Request, Url};
use tracing::debug;

/// Double-submit decorator: copies the anti-forgery cookie into a request
/// header on every mutating request.
///
/// The token is looked up in the cookie store each time `apply` runs, so a
/// cookie rotated by the server is picked up by the very next request.
#[derive(Clone)]
pub struct CsrfLayer {
    cookies: Arc<dyn CookieStore>,
    cookie_name: String,
    header: HeaderName,
}

impl CsrfLayer {
    pub fn new(cookies: Arc<dyn CookieStore>) -> Self {
        Self {
            cookies,
            cookie_name: provenance_config::CSRF_COOKIE_NAME.to_string(),
            header: HeaderName::from_static(provenance_config::CSRF_HEADER_NAME),
        }
    }

    pub fn is_mutating(method: &Method) -> bool {
        matches!(
            *method,
            Method::POST | Method::PUT | Method::PATCH | Method::DELETE
        )
    }

    /// Current token for `url`, percent-decoded.
    pub fn token_for(&self, url: &Url) -> Option<String> {
        let header = self.cookies.cookies(url)?;
        let raw = header.to_str().ok()?;
        let prefix = format!("{}=", self.cookie_name);

        raw.split(';')
            .map(str::trim)
            .find_map(|c| c.strip_prefix(prefix.as_str()))
            .filter(|v| !v.is_empty())
            .map(|v| percent_decode_str(v).decode_utf8_lossy().into_owned())
    }

    pub fn apply(&self, request: &mut Request) {
        if !Self::is_mutating(request.method()) {
            return;
        }

        let Some(token) = self.token_for(request.url()) else {
            debug!("No {} cookie for {}", self.cookie_name, request.url());
            return;
        };

        match HeaderValue::from_str(&token) {
            Ok(value) => {
                request.headers_mut().insert(self.header.clone(), value);
            }
            Err(_) => debug!("Ignoring {} cookie with invalid characters", self.cookie_name),
        }
    }
}
