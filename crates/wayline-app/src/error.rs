//! # Design
//!
//! - Centralize application-level errors for the bootstrap path.
//! - Keep error messages constant while carrying context fields for
//!   debugging.
//! - Preserve source errors without re-logging at call sites.

use std::io;

use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// HTTP client construction or configuration failed.
    #[error("client operation failed")]
    Client {
        /// Operation identifier.
        operation: &'static str,
        /// Source client error.
        source: wayline_client::ClientError,
    },
    /// Telemetry operations failed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        source: wayline_telemetry::TelemetryError,
    },
    /// IO operations failed.
    #[error("io operation failed")]
    Io {
        /// Operation identifier.
        operation: &'static str,
        /// Source IO error.
        source: io::Error,
    },
}

impl AppError {
    pub(crate) const fn client(
        operation: &'static str,
        source: wayline_client::ClientError,
    ) -> Self {
        Self::Client { operation, source }
    }

    pub(crate) const fn telemetry(
        operation: &'static str,
        source: wayline_telemetry::TelemetryError,
    ) -> Self {
        Self::Telemetry { operation, source }
    }
}
