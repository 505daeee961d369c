//! Fixed contract values shared with the backend and the transit provider.
//!
//! # Design
//! - Centralize wire-level names so client and bootstrap code agree.
//! - The CSRF cookie/header pair matches what the backend framework emits.

use url::Url;

/// Environment variable consulted once at startup for the API base URL.
pub const ENV_API_BASE_URL: &str = "WAYLINE_API_BASE_URL";

/// Host used when no base URL override is provided.
pub const DEFAULT_API_BASE_URL: &str = "https://jiyoung.pythonanywhere.com";

/// Base URL of the third-party transit routing API.
pub const TRANSIT_API_BASE_URL: &str = "https://api.odsay.com/v1/api/";

/// Cookie the backend sets alongside the CSRF token.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Header carrying the CSRF token on state-mutating requests.
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// Path issued against the primary base URL to obtain a CSRF token.
pub const CSRF_TOKEN_PATH: &str = "/map/set-csrf-token/";

/// Parsed form of [`DEFAULT_API_BASE_URL`].
///
/// # Panics
///
/// Panics if the compiled-in default host is not a valid URL.
#[must_use]
pub fn default_base_url() -> Url {
    Url::parse(DEFAULT_API_BASE_URL).expect("default API base URL must parse")
}

/// Parsed form of [`TRANSIT_API_BASE_URL`].
///
/// # Panics
///
/// Panics if the compiled-in transit host is not a valid URL.
#[must_use]
pub fn transit_base_url() -> Url {
    Url::parse(TRANSIT_API_BASE_URL).expect("transit API base URL must parse")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_in_hosts_parse() {
        assert_eq!(default_base_url().scheme(), "https");
        assert_eq!(transit_base_url().path(), "/v1/api/");
    }
}
