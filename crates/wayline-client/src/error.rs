//! # Design
//!
//! - Keep error messages constant while carrying context fields for
//!   debugging.
//! - Preserve source errors without re-logging at call sites.
//! - `detail()` prefers a server-supplied body over the transport error,
//!   so log lines show the most useful failure description available.

use reqwest::header::{InvalidHeaderName, InvalidHeaderValue};
use thiserror::Error;

/// Result alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// HTTP client error type.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Constructing the underlying HTTP client failed.
    #[error("failed to build http client")]
    Build {
        /// Source builder error.
        source: reqwest::Error,
    },
    /// A request path could not be joined onto the base URL.
    #[error("invalid request path")]
    InvalidPath {
        /// Path that failed to join.
        path: String,
        /// Source parse error.
        source: url::ParseError,
    },
    /// A default header name was not a valid header name.
    #[error("invalid header name")]
    InvalidHeaderName {
        /// Offending header name.
        name: String,
        /// Source header error.
        source: InvalidHeaderName,
    },
    /// A default header value contained invalid characters.
    #[error("invalid header value")]
    InvalidHeaderValue {
        /// Header the value was destined for.
        name: String,
        /// Source header error.
        source: InvalidHeaderValue,
    },
    /// The request failed at the transport level.
    #[error("http request failed")]
    Http {
        /// Operation identifier.
        operation: &'static str,
        /// URL used for the request.
        url: String,
        /// Source HTTP client error.
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("http response status error")]
    Status {
        /// Operation identifier.
        operation: &'static str,
        /// URL used for the request.
        url: String,
        /// HTTP status code returned by the server.
        status: u16,
        /// Server-supplied error body, when one was readable.
        detail: Option<String>,
    },
}

impl ClientError {
    /// Best-available failure description for logging.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Status { status, .. } => format!("request failed with status {status}"),
            Self::Http { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_prefers_server_body() {
        let error = ClientError::Status {
            operation: "fetch_csrf_token",
            url: "https://api.example.test/map/set-csrf-token/".into(),
            status: 500,
            detail: Some("database unavailable".into()),
        };
        assert_eq!(error.detail(), "database unavailable");
    }

    #[test]
    fn detail_falls_back_to_status() {
        let error = ClientError::Status {
            operation: "fetch_csrf_token",
            url: "https://api.example.test/map/set-csrf-token/".into(),
            status: 502,
            detail: None,
        };
        assert_eq!(error.detail(), "request failed with status 502");
    }
}
