//! Strict configuration parsing errors.
//!
//! The bootstrap path itself never aborts on these; it degrades to the
//! compiled-in default instead. The typed errors exist so resolution can
//! report why an override was rejected.

use thiserror::Error;

/// Result alias for configuration parsing.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reasons a base URL override is unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The override was present but blank.
    #[error("base URL override is empty")]
    EmptyBaseUrl,
    /// The override did not parse as a URL.
    #[error("base URL override is not a valid URL")]
    InvalidBaseUrl {
        /// Raw override value as provided.
        value: String,
        /// Source parse error.
        source: url::ParseError,
    },
    /// The override parsed but used a scheme the HTTP client cannot speak.
    #[error("base URL override has an unsupported scheme")]
    UnsupportedScheme {
        /// Raw override value as provided.
        value: String,
        /// Scheme that was rejected.
        scheme: String,
    },
}
