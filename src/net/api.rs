//! HTTP transport for the auth server.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: `HttpAuthApi` returns `RequestError::Unavailable`
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Status and body interpretation lives in `interpret_response`, which is
//! pure so every server outcome can be tested without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{AuthPayload, AuthRequest, ErrorBody};
use crate::config::AuthConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Something that can post an auth request and hand back the payload.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Send `request` once. No retry.
    async fn post(&self, request: &AuthRequest) -> Result<AuthPayload, RequestError>;
}

/// Browser transport against `<server_domain><route>`.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    config: AuthConfig,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn url_for(&self, request: &AuthRequest) -> String {
        self.config.endpoint(request.route.path())
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn post(&self, request: &AuthRequest) -> Result<AuthPayload, RequestError> {
        #[cfg(feature = "csr")]
        {
            let url = self.url_for(request);
            let resp = gloo_net::http::Request::post(&url)
                .json(&request.body)
                .map_err(|e| RequestError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| RequestError::Network(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| RequestError::Network(e.to_string()))?;
            interpret_response(status, &text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(RequestError::Unavailable)
        }
    }
}

/// Turn a raw status + body into a payload or a typed failure.
///
/// # Errors
///
/// Non-2xx statuses become `Server` with the body's `error` text (or a
/// status fallback); unparseable 2xx bodies become `Decode`.
pub fn interpret_response(status: u16, body: &str) -> Result<AuthPayload, RequestError> {
    if (200..300).contains(&status) {
        return serde_json::from_str::<AuthPayload>(body).map_err(|e| RequestError::Decode(e.to_string()));
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| request_failed_message(status));
    Err(RequestError::Server { status, message })
}

fn request_failed_message(status: u16) -> String {
    format!("Request failed with status {status}")
}
