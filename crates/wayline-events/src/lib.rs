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

//! In-memory event bus for the Wayline shell.
//!
//! The bus carries a typed event enum with sequential identifiers over
//! `tokio::broadcast`. Delivery is best-effort to the subscribers present
//! at publish time; there is no persistence and no replay. When the
//! channel overflows, the oldest events are dropped.
//!
//! Layout: `payloads.rs` (event enum and envelope), `routing.rs`
//! (`EventBus` and the subscriber stream), `error.rs` (publish failures).

pub mod error;
pub mod payloads;
pub mod routing;

pub use error::EventBusError;
pub use payloads::{Event, EventEnvelope, EventId};
pub use routing::{EventBus, EventStream};
