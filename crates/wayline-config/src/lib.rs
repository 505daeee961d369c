#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Startup configuration for the Wayline shell.
//!
//! Layout: `defaults.rs` (fixed contract constants), `model.rs` (resolved
//! configuration and the env-or-default resolution helpers), `error.rs`
//! (strict parsing failures).

pub mod defaults;
pub mod error;
pub mod model;

pub use defaults::{
    CSRF_COOKIE_NAME, CSRF_HEADER_NAME, CSRF_TOKEN_PATH, DEFAULT_API_BASE_URL, ENV_API_BASE_URL,
    TRANSIT_API_BASE_URL, default_base_url, transit_base_url,
};
pub use error::{ConfigError, ConfigResult};
pub use model::{BootstrapConfig, parse_base_url, resolve_base_url};
