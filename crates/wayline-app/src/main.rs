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
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Binary entrypoint that runs the Wayline shell bootstrap and parks
//! until shutdown. Process exit is the only teardown.

use wayline_app::{AppError, AppResult, run_app};

/// Bootstraps the shell and blocks until interrupted.
#[tokio::main]
async fn main() -> AppResult<()> {
    let shell = run_app()?;
    tracing::info!(mount_point = shell.mount_point(), "shell running");

    tokio::signal::ctrl_c()
        .await
        .map_err(|source| AppError::Io {
            operation: "signal.ctrl_c",
            source,
        })?;
    tracing::info!("shutdown requested");
    Ok(())
}
