//! Resolved startup configuration.
//!
//! # Design
//! - Resolution is a pure function over an enumerated input (override
//!   present | absent) so behaviour is testable without touching the
//!   process environment.
//! - A rejected override degrades to the default host rather than failing;
//!   the caller decides how loudly to report it.

use url::Url;

use crate::defaults::{ENV_API_BASE_URL, default_base_url};
use crate::error::{ConfigError, ConfigResult};

/// Configuration the bootstrap sequence runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// Base URL for the primary API client.
    pub api_base_url: Url,
    /// Whether the override was missing or unusable and the default host
    /// was substituted.
    pub degraded: bool,
}

impl BootstrapConfig {
    /// Resolve configuration from the process environment.
    ///
    /// Reads [`ENV_API_BASE_URL`] exactly once; absence or an unusable
    /// value falls back to the default host and flags degradation.
    #[must_use]
    pub fn from_env() -> Self {
        let override_value = std::env::var(ENV_API_BASE_URL).ok();
        let (api_base_url, degraded) = resolve_base_url(override_value.as_deref());
        Self {
            api_base_url,
            degraded,
        }
    }
}

/// Deterministic env-or-default resolution of the API base URL.
///
/// Returns the URL to use and whether the default host was substituted for
/// a missing or rejected override.
#[must_use]
pub fn resolve_base_url(override_value: Option<&str>) -> (Url, bool) {
    match override_value {
        Some(value) => match parse_base_url(value) {
            Ok(url) => (url, false),
            Err(_) => (default_base_url(), true),
        },
        None => (default_base_url(), true),
    }
}

/// Strictly parse a base URL override.
///
/// # Errors
///
/// Returns an error when the value is blank, fails URL parsing, or uses a
/// scheme other than `http`/`https`.
pub fn parse_base_url(value: &str) -> ConfigResult<Url> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }

    let url = trimmed
        .parse::<Url>()
        .map_err(|source| ConfigError::InvalidBaseUrl {
            value: trimmed.to_string(),
            source,
        })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            value: trimmed.to_string(),
            scheme: url.scheme().to_string(),
        });
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::DEFAULT_API_BASE_URL;

    #[test]
    fn valid_override_wins() {
        let (url, degraded) = resolve_base_url(Some("https://api.example.test"));
        assert_eq!(url.as_str(), "https://api.example.test/");
        assert!(!degraded);
    }

    #[test]
    fn absent_override_falls_back() {
        let (url, degraded) = resolve_base_url(None);
        assert_eq!(url, default_base_url());
        assert!(degraded);
    }

    #[test]
    fn empty_override_falls_back() {
        let (url, degraded) = resolve_base_url(Some("   "));
        assert_eq!(url.as_str(), format!("{DEFAULT_API_BASE_URL}/"));
        assert!(degraded);
    }

    #[test]
    fn unparseable_override_falls_back() {
        let (url, degraded) = resolve_base_url(Some("not a url"));
        assert_eq!(url, default_base_url());
        assert!(degraded);
    }

    #[test]
    fn strict_parse_reports_reasons() {
        assert!(matches!(
            parse_base_url(""),
            Err(ConfigError::EmptyBaseUrl)
        ));
        assert!(matches!(
            parse_base_url("::nope::"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            parse_base_url("ftp://files.example.test"),
            Err(ConfigError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn strict_parse_trims_whitespace() {
        let url = parse_base_url("  https://api.example.test  ").expect("expected valid URL");
        assert_eq!(url.host_str(), Some("api.example.test"));
    }
}
