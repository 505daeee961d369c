//! Composition root for the UI layer.
//!
//! Mounting is the terminal bootstrap action: it attaches the root at the
//! fixed mount point, announces the attachment on the bus, and hands the
//! shared context to the (out-of-scope) component tree. Exactly one mount
//! happens per process; re-invoking the bootstrap is unsupported.

use tokio::task::JoinHandle;
use tracing::info;

use wayline_events::Event;

use crate::bootstrap::publish_event;
use crate::context::SharedContext;

/// Fixed identifier of the element the root attaches to.
pub const MOUNT_POINT: &str = "app";

/// Handle to the mounted application root.
///
/// Holds the background tasks started during bootstrap so observers can
/// await their completion; dropping the handle detaches them instead of
/// cancelling.
pub struct MountedShell {
    context: SharedContext,
    background: Vec<JoinHandle<()>>,
}

impl MountedShell {
    /// The shared context injected at mount time.
    #[must_use]
    pub const fn context(&self) -> &SharedContext {
        &self.context
    }

    /// Identifier of the mount point the root attached to.
    #[must_use]
    pub const fn mount_point(&self) -> &'static str {
        MOUNT_POINT
    }

    /// Wait for the background tasks started during bootstrap to settle.
    ///
    /// Mounting never waits on these; this exists for observers that want
    /// to know the CSRF acquisition has run to completion or failure.
    pub async fn join_background(self) -> SharedContext {
        for task in self.background {
            if let Err(err) = task.await {
                tracing::warn!(error = %err, "background task join failed");
            }
        }
        self.context
    }
}

/// Attach the composition root at the fixed mount point.
///
/// Synchronous by construction: nothing here can wait on the network, so
/// the shell becomes interactive regardless of how the CSRF acquisition
/// is faring.
pub(crate) fn mount(context: SharedContext, background: Vec<JoinHandle<()>>) -> MountedShell {
    publish_event(
        &context.events,
        Event::ShellMounted {
            mount_point: MOUNT_POINT.to_string(),
        },
    );
    info!(mount_point = MOUNT_POINT, "shell mounted");
    MountedShell {
        context,
        background,
    }
}
