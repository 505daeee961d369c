//! One-shot CSRF token acquisition.
//!
//! The token fetch is spawned during bootstrap and never awaited by the
//! mount path. On success the token becomes a default header on the
//! primary client; on failure the header stays unset and the outcome is
//! logged and published. There is exactly one attempt per process: no
//! retry, no timeout, and cancellation is not supported.

use serde::Deserialize;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use wayline_config::{CSRF_HEADER_NAME, CSRF_TOKEN_PATH};
use wayline_events::{Event, EventBus};

use crate::client::ApiClient;
use crate::error::{ClientError, ClientResult};

/// Body returned by the CSRF endpoint.
#[derive(Debug, Deserialize)]
pub struct CsrfTokenResponse {
    /// The per-session CSRF secret.
    #[serde(rename = "csrfToken")]
    pub csrf_token: String,
}

/// Fetch a CSRF token from the primary backend.
///
/// # Errors
///
/// Returns an error on transport failure, a non-success status (carrying
/// the server-supplied body when one is readable), or an unparseable
/// response body.
pub async fn fetch_csrf_token(client: &ApiClient) -> ClientResult<String> {
    let response = client.get(CSRF_TOKEN_PATH).await?;
    let status = response.status();
    let url = response.url().clone();

    if !status.is_success() {
        let detail = response
            .text()
            .await
            .ok()
            .map(|body| body.trim().to_string())
            .filter(|body| !body.is_empty());
        return Err(ClientError::Status {
            operation: "fetch_csrf_token",
            url: url.to_string(),
            status: status.as_u16(),
            detail,
        });
    }

    let body: CsrfTokenResponse =
        response
            .json()
            .await
            .map_err(|source| ClientError::Http {
                operation: "fetch_csrf_token",
                url: url.to_string(),
                source,
            })?;
    Ok(body.csrf_token)
}

/// Spawn the token acquisition without awaiting it.
///
/// The returned handle is only useful to observers (tests, shutdown
/// reporting); dropping it detaches the task.
pub fn spawn_csrf_acquisition(client: ApiClient, events: EventBus) -> JoinHandle<()> {
    tokio::spawn(async move {
        match fetch_csrf_token(&client).await {
            Ok(token) => match client.set_default_header(CSRF_HEADER_NAME, &token) {
                Ok(()) => {
                    info!("CSRF token installed on primary client");
                    publish(&events, Event::CsrfTokenAcquired);
                }
                Err(err) => {
                    error!(error = %err, "CSRF token rejected as a header value");
                    publish(
                        &events,
                        Event::CsrfFetchFailed {
                            message: err.to_string(),
                        },
                    );
                }
            },
            Err(err) => {
                let message = err.detail();
                error!(error = %err, detail = %message, "CSRF token acquisition failed");
                publish(&events, Event::CsrfFetchFailed { message });
            }
        }
    })
}

fn publish(events: &EventBus, event: Event) {
    if let Err(error) = events.publish(event) {
        warn!(
            event_id = error.event_id(),
            event_kind = error.event_kind(),
            error = %error,
            "failed to publish event"
        );
    }
}
