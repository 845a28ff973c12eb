// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! API client
//!
//! Builds and sends authorized requests against the HitCraft REST API and
//! classifies every response into a [`RequestOutcome`].

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN};
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::api::outcome::{RequestOutcome, TransientFailure};
use crate::auth::TokenProvider;
use crate::config::Settings;
use crate::error::{ApiError, Result};

/// Executes HTTP requests with the current session credential attached
///
/// One attempt per call; retry policy stays with the caller.
#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<TokenProvider>,
}

impl ApiClient {
    /// Create a client from settings
    pub fn new(settings: &Settings, tokens: Arc<TokenProvider>) -> Result<Self> {
        Self::with_base_url(
            &settings.api_base_url,
            &settings.web_app_url,
            settings.request_timeout_secs,
            tokens,
        )
    }

    /// Create a client with an explicit base URL
    pub fn with_base_url(
        base_url: &str,
        origin: &str,
        timeout_secs: u64,
        tokens: Arc<TokenProvider>,
    ) -> Result<Self> {
        Url::parse(base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        // The backend's CORS/ALB setup expects a browser-like Origin
        if let Ok(value) = HeaderValue::from_str(origin) {
            headers.insert(ORIGIN, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// Execute a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> RequestOutcome<T> {
        self.execute(Method::GET, path, None::<&()>).await
    }

    /// Execute a POST request with a JSON body
    pub async fn post<B, T>(&self, path: &str, body: &B) -> RequestOutcome<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::POST, path, Some(body)).await
    }

    async fn execute<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> RequestOutcome<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        // No credential means no point hitting the network
        let Some(credential) = self.tokens.current_token() else {
            debug!(%path, "no session credential, short-circuiting to unauthorized");
            return RequestOutcome::Unauthorized;
        };

        let url = format!("{}{}", self.base_url, path);
        let url = match Url::parse(&url) {
            Ok(url) => url,
            Err(e) => {
                warn!(%url, error = %e, "request URL failed to parse");
                return RequestOutcome::Transient(TransientFailure::Network(format!(
                    "invalid request URL: {e}"
                )));
            }
        };

        debug!(%method, %url, "sending request");

        let mut request = self
            .client
            .request(method, url)
            .bearer_auth(&credential.token);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "transport failure");
                return RequestOutcome::Transient(TransientFailure::Network(e.to_string()));
            }
        };

        let status = response.status();
        debug!(status = status.as_u16(), "response received");

        if status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    return RequestOutcome::Transient(TransientFailure::Network(e.to_string()))
                }
            };
            return match serde_json::from_str::<T>(&body) {
                Ok(payload) => RequestOutcome::Success(payload),
                Err(e) => {
                    warn!(error = %e, "response body did not match expected schema");
                    RequestOutcome::DecodeFailure(e.to_string())
                }
            };
        }

        let body = response.text().await.unwrap_or_default();

        match status {
            StatusCode::UNAUTHORIZED => {
                // A rejected token is dead; wipe it so the caller re-authenticates
                warn!("request unauthorized, clearing stored credential");
                self.tokens.clear();
                RequestOutcome::Unauthorized
            }
            StatusCode::FORBIDDEN => RequestOutcome::Forbidden(extract_error_message(&body)),
            StatusCode::SERVICE_UNAVAILABLE => {
                RequestOutcome::Transient(TransientFailure::ServiceUnavailable)
            }
            _ => {
                if let Some(messages) = extract_validation_errors(&body) {
                    return RequestOutcome::Validation(messages);
                }
                RequestOutcome::ServerError {
                    status: status.as_u16(),
                    message: extract_error_message(&body)
                        .unwrap_or_else(|| body.trim().to_string()),
                }
            }
        }
    }
}

/// Pull a human-readable message out of a JSON error body
///
/// Accepts both `{"message": ...}` and `{"error": {"message": ...}}`.
fn extract_error_message(body: &str) -> Option<String> {
    let parsed: serde_json::Value = serde_json::from_str(body).ok()?;
    parsed["message"]
        .as_str()
        .or_else(|| parsed["error"]["message"].as_str())
        .map(|s| s.to_string())
}

/// Pull validation messages out of a JSON error body (`{"errors": [..]}`)
fn extract_validation_errors(body: &str) -> Option<Vec<String>> {
    let parsed: serde_json::Value = serde_json::from_str(body).ok()?;
    let errors = parsed["errors"].as_array()?;
    let messages: Vec<String> = errors
        .iter()
        .filter_map(|e| {
            e.as_str()
                .map(|s| s.to_string())
                .or_else(|| e["message"].as_str().map(|s| s.to_string()))
        })
        .collect();
    if messages.is_empty() {
        None
    } else {
        Some(messages)
    }
}
