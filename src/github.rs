use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Serialize;
use thiserror::Error;

use crate::constants::{
    DISPATCH_EVENT_TYPE, DISPATCH_LINE, GITHUB_ACCEPT, GITHUB_OWNER, GITHUB_REPO,
};

/// Outcome of a dispatch attempt that did not succeed.
///
/// The Display strings are shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DispatchError {
    /// GitHub answered with a non-success status
    #[error("Error: {}", .message.as_deref().unwrap_or("Unknown error"))]
    Api { status: u16, message: Option<String> },

    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(String),
}

/// JSON body of the repository_dispatch request
#[derive(Debug, Serialize)]
pub struct DispatchPayload {
    event_type: &'static str,
    client_payload: ClientPayload,
}

#[derive(Debug, Serialize)]
struct ClientPayload {
    line: [&'static str; 1],
}

impl DispatchPayload {
    pub fn new() -> Self {
        DispatchPayload {
            event_type: DISPATCH_EVENT_TYPE,
            client_payload: ClientPayload {
                line: [DISPATCH_LINE],
            },
        }
    }
}

/// Client for firing the repository_dispatch event
pub struct DispatchClient {
    http: reqwest::Client,
    url: String,
}

impl DispatchClient {
    pub fn new() -> Self {
        DispatchClient {
            http: reqwest::Client::new(),
            url: format!(
                "https://api.github.com/repos/{}/{}/dispatches",
                GITHUB_OWNER, GITHUB_REPO
            ),
        }
    }

    /// POST the dispatch event using the given token.
    ///
    /// Any 2xx status counts as success. Other statuses are reported with
    /// the message field from the response body when one is present.
    pub async fn trigger(&self, token: &str) -> Result<(), DispatchError> {
        tracing::info!("Dispatching '{}' to {}", DISPATCH_EVENT_TYPE, self.url);

        let response = self
            .http
            .post(&self.url)
            .header(
                USER_AGENT,
                concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
            )
            .header(AUTHORIZATION, format!("token {}", token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .json(&DispatchPayload::new())
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Dispatch transport failure: {}", e);
                DispatchError::Network(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!("Dispatch accepted: {}", status);
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!("Dispatch rejected: {} {}", status, body);
        Err(api_error(status.as_u16(), &body))
    }
}

// Pull the message field out of the JSON error body when possible.
// An empty message counts as absent.
fn api_error(status: u16, body: &str) -> DispatchError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .filter(|m| !m.is_empty());

    DispatchError::Api { status, message }
}
