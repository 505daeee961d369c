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

//! Wayline shell bootstrap wiring.
//!
//! Layout: `bootstrap.rs` (the boot sequence), `context.rs` (the shared
//! context handed to the UI layer), `shell.rs` (composition root and
//! mount point).

/// Application bootstrap and environment loading.
pub mod bootstrap;
/// Shared singletons injected into the UI layer.
pub mod context;
/// Application error types.
pub mod error;
/// Composition root and mount handle.
pub mod shell;

pub use bootstrap::run_app;
pub use context::SharedContext;
pub use error::{AppError, AppResult};
pub use shell::{MOUNT_POINT, MountedShell};
