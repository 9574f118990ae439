//! Central configuration constants for the archive client.

/// Base URL used when neither a flag nor `ARCHIVE_URL` provides one.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api/";

/// Environment variable consulted for the archive base URL.
pub const BASE_URL_ENV: &str = "ARCHIVE_URL";

/// Cookie the server uses to hand out the anti-forgery token.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Header mutating requests must echo the anti-forgery token in
/// (`X-CSRFToken` on the wire; header names are case-insensitive).
pub const CSRF_HEADER_NAME: &str = "x-csrftoken";

/// Capacity of the channel list views receive fetch results on.
pub const VIEW_EVENT_CAPACITY: usize = 64;

/// User agent sent with every archive request.
pub const USER_AGENT: &str = concat!("provenance-client/", env!("CARGO_PKG_VERSION"));

/// Force a trailing slash so relative API paths join under the base
/// rather than replacing its last segment.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}
