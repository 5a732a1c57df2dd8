// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared HTTP client for the PlatePal REST API.
//!
//! Provides [`ApiClient`], which handles base-URL joining, bearer-token
//! attachment, JSON decoding, and mapping of HTTP failures onto the
//! workspace error taxonomy. Per-resource operations live in
//! [`crate::resources`].
//!
//! REST calls are never retried automatically; only the chat socket has a
//! reconnect policy.

use std::sync::Arc;
use std::time::Duration;

use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use platepal_config::ApiConfig;
use platepal_core::{PlatePalError, TokenSource};

use crate::types::ApiErrorBody;

/// HTTP client for PlatePal backend communication.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenSource>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a new API client.
    ///
    /// The token source is read on every request, so a login or logout is
    /// picked up by in-flight consumers without rebuilding the client.
    pub fn new(
        config: &ApiConfig,
        tokens: Arc<dyn TokenSource>,
    ) -> Result<Self, PlatePalError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| PlatePalError::Network {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, PlatePalError> {
        self.execute(self.http.get(self.url(path))).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, PlatePalError> {
        self.execute(self.http.post(self.url(path)).json(body)).await
    }

    /// Sends a request with the current bearer token attached and decodes the
    /// JSON response.
    ///
    /// Status mapping: 401 -> [`PlatePalError::Unauthorized`] (the session
    /// layer forces a logout), 403 -> [`PlatePalError::BusinessRule`] with the
    /// server's inline message, anything else non-success ->
    /// [`PlatePalError::Network`]. An undecodable success body is a
    /// [`PlatePalError::Payload`].
    async fn execute<T: DeserializeOwned>(
        &self,
        mut request: RequestBuilder,
    ) -> Result<T, PlatePalError> {
        if let Some(token) = self.tokens.bearer_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| PlatePalError::Network {
            message: format!("HTTP request failed: {e}"),
            source: Some(Box::new(e)),
        })?;

        let status = response.status();
        debug!(status = %status, "API response received");

        if status.is_success() {
            let body = response.text().await.map_err(|e| PlatePalError::Network {
                message: format!("failed to read response body: {e}"),
                source: Some(Box::new(e)),
            })?;
            return serde_json::from_str(&body).map_err(|e| {
                warn!(error = %e, "dropping undecodable API payload");
                PlatePalError::Payload(format!("failed to decode API response: {e}"))
            });
        }

        match status.as_u16() {
            401 => Err(PlatePalError::Unauthorized),
            403 => {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiErrorBody>(&body)
                    .map(|b| b.message)
                    .unwrap_or_else(|_| "forbidden".to_string());
                Err(PlatePalError::BusinessRule { message })
            }
            _ => {
                let body = response.text().await.unwrap_or_default();
                Err(PlatePalError::Network {
                    message: format!("API returned {status}: {body}"),
                    source: None,
                })
            }
        }
    }
}
