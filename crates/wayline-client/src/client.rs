//! Long-lived HTTP clients shared across the shell.
//!
//! # Design
//! - One `ApiClient` per backend, built once at startup and cloned into
//!   every consumer; clones share the default-header map, so a header
//!   installed after startup (the CSRF token) is visible everywhere.
//! - Two clients built from different profiles share nothing: mutating
//!   the primary client's headers never touches the transit client.

use std::sync::{Arc, PoisonError, RwLock};

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use wayline_config::transit_base_url;

use crate::error::{ClientError, ClientResult};

/// Configuration shape a client is built from.
#[derive(Debug, Clone)]
pub struct ClientProfile {
    /// Root address prefixed to relative request paths.
    pub base_url: Url,
    /// Whether cookies are stored and replayed across requests.
    pub with_credentials: bool,
    /// Headers attached to every request issued through the client.
    pub default_headers: HeaderMap,
}

impl ClientProfile {
    /// Profile for the credentialed first-party API.
    #[must_use]
    pub fn credentialed(base_url: Url) -> Self {
        Self {
            base_url,
            with_credentials: true,
            default_headers: HeaderMap::new(),
        }
    }

    /// Profile for an anonymous third-party API.
    #[must_use]
    pub fn anonymous(base_url: Url) -> Self {
        Self {
            base_url,
            with_credentials: false,
            default_headers: HeaderMap::new(),
        }
    }
}

/// Process-wide HTTP client handle.
///
/// Cloning is cheap and preserves singleton semantics: every clone issues
/// requests through the same connection pool, cookie store, and
/// default-header map.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    with_credentials: bool,
    default_headers: Arc<RwLock<HeaderMap>>,
}

impl ApiClient {
    /// Build a client from a profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_profile(profile: ClientProfile) -> ClientResult<Self> {
        let http = Client::builder()
            .cookie_store(profile.with_credentials)
            .build()
            .map_err(|source| ClientError::Build { source })?;

        Ok(Self {
            http,
            base_url: profile.base_url,
            with_credentials: profile.with_credentials,
            default_headers: Arc::new(RwLock::new(profile.default_headers)),
        })
    }

    /// Build the credentialed primary client for the resolved base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn primary(base_url: Url) -> ClientResult<Self> {
        Self::from_profile(ClientProfile::credentialed(base_url))
    }

    /// Build the anonymous client for the third-party transit API.
    ///
    /// The base URL is fixed and independent of any environment input.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn transit() -> ClientResult<Self> {
        Self::from_profile(ClientProfile::anonymous(transit_base_url()))
    }

    /// Base URL the client was configured with.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether the client stores and replays cookies.
    #[must_use]
    pub const fn is_credentialed(&self) -> bool {
        self.with_credentials
    }

    /// Install a default header on this client and all of its clones.
    ///
    /// Last writer wins; in practice the only post-startup writer is the
    /// CSRF continuation, which writes exactly once.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or value is not a valid header.
    pub fn set_default_header(&self, name: &str, value: &str) -> ClientResult<()> {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|source| {
                ClientError::InvalidHeaderName {
                    name: name.to_string(),
                    source,
                }
            })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|source| ClientError::InvalidHeaderValue {
                name: name.to_string(),
                source,
            })?;

        let mut headers = self
            .default_headers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        headers.insert(header_name, header_value);
        Ok(())
    }

    /// Current value of a default header, if one is set.
    #[must_use]
    pub fn default_header(&self, name: &str) -> Option<String> {
        let headers = self
            .default_headers
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string)
    }

    /// Issue a GET request for a path relative to the base URL.
    ///
    /// The current default headers are attached to the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be joined onto the base URL or
    /// the request fails at the transport level.
    pub async fn get(&self, path: &str) -> ClientResult<reqwest::Response> {
        let url = self.join(path)?;
        self.http
            .get(url.clone())
            .headers(self.snapshot_headers())
            .send()
            .await
            .map_err(|source| ClientError::Http {
                operation: "get",
                url: url.to_string(),
                source,
            })
    }

    fn join(&self, path: &str) -> ClientResult<Url> {
        self.base_url
            .join(path)
            .map_err(|source| ClientError::InvalidPath {
                path: path.to_string(),
                source,
            })
    }

    fn snapshot_headers(&self) -> HeaderMap {
        self.default_headers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use httpmock::prelude::*;
    use wayline_config::TRANSIT_API_BASE_URL;

    fn mock_client(server: &MockServer) -> Result<ApiClient> {
        let base_url = server.base_url().parse::<Url>()?;
        Ok(ApiClient::primary(base_url)?)
    }

    #[test]
    fn transit_client_is_constant() -> Result<()> {
        let transit = ApiClient::transit()?;
        assert_eq!(transit.base_url().as_str(), TRANSIT_API_BASE_URL);
        assert!(!transit.is_credentialed());
        Ok(())
    }

    #[test]
    fn primary_client_is_credentialed() -> Result<()> {
        let primary = ApiClient::primary("https://api.example.test".parse()?)?;
        assert!(primary.is_credentialed());
        assert_eq!(primary.default_header("X-CSRFToken"), None);
        Ok(())
    }

    #[test]
    fn header_mutation_is_isolated_between_clients() -> Result<()> {
        let primary = ApiClient::primary("https://api.example.test".parse()?)?;
        let transit = ApiClient::transit()?;

        primary.set_default_header("X-CSRFToken", "abc123")?;

        assert_eq!(
            primary.default_header("X-CSRFToken").as_deref(),
            Some("abc123")
        );
        assert_eq!(transit.default_header("X-CSRFToken"), None);
        Ok(())
    }

    #[test]
    fn header_mutation_is_shared_between_clones() -> Result<()> {
        let primary = ApiClient::primary("https://api.example.test".parse()?)?;
        let clone = primary.clone();

        clone.set_default_header("X-CSRFToken", "abc123")?;

        assert_eq!(
            primary.default_header("X-CSRFToken").as_deref(),
            Some("abc123")
        );
        Ok(())
    }

    #[test]
    fn invalid_header_values_are_rejected() -> Result<()> {
        let primary = ApiClient::primary("https://api.example.test".parse()?)?;
        assert!(matches!(
            primary.set_default_header("bad name", "v"),
            Err(ClientError::InvalidHeaderName { .. })
        ));
        assert!(matches!(
            primary.set_default_header("X-CSRFToken", "line\nbreak"),
            Err(ClientError::InvalidHeaderValue { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn get_attaches_current_default_headers() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/ping").header("X-CSRFToken", "abc123");
            then.status(200);
        });

        let client = mock_client(&server)?;
        client.set_default_header("X-CSRFToken", "abc123")?;
        let response = client.get("/ping").await?;

        assert!(response.status().is_success());
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn get_before_header_installation_sends_no_token() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/ping").header_missing("X-CSRFToken");
            then.status(200);
        });

        let client = mock_client(&server)?;
        let response = client.get("/ping").await?;

        assert!(response.status().is_success());
        mock.assert();
        Ok(())
    }
}
