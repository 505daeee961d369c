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

//! HTTP clients for the Wayline shell.
//!
//! Layout: `client.rs` (`ApiClient` and its profiles), `csrf.rs` (one-shot
//! CSRF token acquisition), `error.rs` (client error type).

pub mod client;
pub mod csrf;
pub mod error;

pub use client::{ApiClient, ClientProfile};
pub use csrf::{CsrfTokenResponse, fetch_csrf_token, spawn_csrf_acquisition};
pub use error::{ClientError, ClientResult};
