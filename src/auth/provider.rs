// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Token provider
//!
//! Serialized access to the credential store, plus the refresh-token
//! exchange against the auth service.

use std::sync::Mutex;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::auth::credential::{Credential, CredentialStore};
use crate::config::Settings;
use crate::error::{AuthError, Result};

/// Path of the refresh endpoint on the auth base URL
const REFRESH_PATH: &str = "/v1/auth/refresh";

/// Holds and refreshes the current session credential
///
/// All credential mutation goes through the inner mutex; the lock is never
/// held across an await point.
#[derive(Debug)]
pub struct TokenProvider {
    store: Mutex<CredentialStore>,
    client: Client,
    auth_base_url: String,
}

/// Response body of the refresh endpoint
#[derive(Debug, Deserialize)]
struct RefreshResponse {
    #[serde(rename = "sessionJwt")]
    session_jwt: String,
    #[serde(rename = "refreshJwt")]
    refresh_jwt: Option<String>,
}

impl TokenProvider {
    /// Create a provider backed by the default credentials file
    pub fn new(settings: &Settings) -> Result<Self> {
        let store = CredentialStore::open(Settings::credentials_path())?;
        Self::with_store(store, &settings.auth_base_url, settings.request_timeout_secs)
    }

    /// Create a provider with an explicit store and auth base URL
    pub fn with_store(
        store: CredentialStore,
        auth_base_url: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            store: Mutex::new(store),
            client,
            auth_base_url: auth_base_url.into(),
        })
    }

    /// Non-blocking read of the current credential
    pub fn current_token(&self) -> Option<Credential> {
        self.store
            .lock()
            .expect("credential store lock poisoned")
            .get()
            .cloned()
    }

    /// Store a credential after login
    pub fn set_credential(&self, credential: Credential) -> Result<()> {
        self.store
            .lock()
            .expect("credential store lock poisoned")
            .set(credential)
    }

    /// Wipe stored credentials; idempotent
    pub fn clear(&self) {
        self.store
            .lock()
            .expect("credential store lock poisoned")
            .clear();
    }

    /// Exchange the stored refresh token for a new session credential
    ///
    /// One attempt, no internal retry; the caller decides whether to retry.
    pub async fn refresh(&self) -> std::result::Result<Credential, AuthError> {
        let refresh_token = self
            .current_token()
            .and_then(|c| c.refresh_token)
            .ok_or(AuthError::Unauthorized)?;

        let url = format!("{}{}", self.auth_base_url, REFRESH_PATH);
        debug!(%url, "refreshing session token");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&refresh_token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            warn!(status = status.as_u16(), "refresh token rejected");
            return Err(AuthError::Unauthorized);
        }
        if !status.is_success() {
            return Err(AuthError::InvalidResponse(format!(
                "refresh endpoint returned {}",
                status.as_u16()
            )));
        }

        let body: RefreshResponse = response
            .json()
            .await
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;

        // Keep the old refresh token if the exchange did not rotate it
        let credential = Credential {
            token: body.session_jwt,
            refresh_token: body.refresh_jwt.or(Some(refresh_token)),
        };

        self.set_credential(credential.clone())
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;

        Ok(credential)
    }
}
