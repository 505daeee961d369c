//! Shared context handed to the UI layer at mount time.
//!
//! These four values are the stable contract with UI collaborators: every
//! component can reach them from the composition root without
//! prop-threading. The context is constructed exactly once during
//! bootstrap and its shape never changes afterwards; clones share the
//! underlying clients and bus.

use url::Url;

use wayline_client::ApiClient;
use wayline_events::EventBus;

/// Singletons shared with every UI component for the life of the process.
#[derive(Clone)]
pub struct SharedContext {
    /// Credentialed client for the first-party API.
    pub primary: ApiClient,
    /// Anonymous client for the third-party transit API.
    pub transit: ApiClient,
    /// Base URL the primary client was configured with.
    pub base_url: Url,
    /// In-memory publish/subscribe channel between components.
    pub events: EventBus,
}
