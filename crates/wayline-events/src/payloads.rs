//! Event payload types surfaced across the shell.

use chrono::{DateTime, Utc};

/// Identifier assigned to each event emitted on a bus.
pub type EventId = u64;

/// Default broadcast channel capacity.
pub(crate) const DEFAULT_BUS_CAPACITY: usize = 256;

/// Typed events exchanged between the bootstrap path and UI listeners.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// The API base URL was resolved during startup.
    ConfigResolved {
        /// Base URL the primary client was configured with.
        base_url: String,
        /// Whether the compiled-in default was substituted for the override.
        fallback: bool,
    },
    /// The CSRF token was fetched and installed on the primary client.
    CsrfTokenAcquired,
    /// The CSRF token fetch failed; the header stays unset.
    CsrfFetchFailed {
        /// Best-available failure detail, preferring the server body.
        message: String,
    },
    /// Subsystems entered or left a degraded state.
    HealthChanged {
        /// Names of the currently degraded subsystems.
        degraded: Vec<String>,
    },
    /// The composition root attached to its mount point.
    ShellMounted {
        /// Identifier of the mount point the shell attached to.
        mount_point: String,
    },
}

impl Event {
    /// Machine-friendly discriminator for log filtering and listeners.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ConfigResolved { .. } => "config_resolved",
            Self::CsrfTokenAcquired => "csrf_token_acquired",
            Self::CsrfFetchFailed { .. } => "csrf_fetch_failed",
            Self::HealthChanged { .. } => "health_changed",
            Self::ShellMounted { .. } => "shell_mounted",
        }
    }
}

/// Metadata wrapper around events. Each envelope tracks the event id and
/// emission timestamp.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct EventEnvelope {
    /// Sequential identifier assigned at publish time.
    pub id: EventId,
    /// Emission timestamp.
    pub timestamp: DateTime<Utc>,
    /// The published event.
    pub event: Event,
}
