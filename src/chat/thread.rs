// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Thread identity and resolution
//!
//! Decides which server-side conversation thread a message belongs to:
//! reuse the existing one, create a new one, or degrade to a local
//! placeholder when the backend is unreachable.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::api::endpoints;
use crate::api::schema::{CreateThreadRequest, CreateThreadResponse};
use crate::api::{ApiClient, RequestOutcome};
use crate::error::ApiError;

/// Prefix marking a client-generated placeholder thread id
///
/// A placeholder is never valid as a real server thread reference.
const PLACEHOLDER_PREFIX: &str = "local-thread-";

/// Identifier of a server-side conversation thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadId(String);

impl ThreadId {
    /// Wrap a server-issued thread id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Synthesize a placeholder id with a random suffix
    pub fn placeholder() -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!("{PLACEHOLDER_PREFIX}{}", &suffix[..8]))
    }

    /// Whether this id is a client-generated placeholder
    pub fn is_placeholder(&self) -> bool {
        self.0.starts_with(PLACEHOLDER_PREFIX)
    }

    /// The raw id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves the thread a message should be appended to
pub struct ThreadResolver {
    api: Arc<ApiClient>,
}

impl ThreadResolver {
    /// Create a resolver over an API client
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Resolve a usable thread id for the given artist
    ///
    /// An existing non-placeholder id is returned unchanged with no network
    /// call, so a logical conversation creates at most one thread. Otherwise
    /// one create-thread call is made; `Unauthorized` propagates, and every
    /// other failure degrades to a placeholder so the caller can still answer
    /// locally.
    pub async fn resolve(
        &self,
        existing: Option<&ThreadId>,
        artist_id: &str,
    ) -> Result<ThreadId, ApiError> {
        if let Some(thread_id) = existing {
            if !thread_id.is_placeholder() {
                return Ok(thread_id.clone());
            }
            debug!(%thread_id, "placeholder thread, attempting to create a real one");
        }

        let body = CreateThreadRequest {
            artist_id: artist_id.to_string(),
        };
        let outcome: RequestOutcome<CreateThreadResponse> =
            self.api.post(endpoints::CREATE_CHAT, &body).await;

        match outcome {
            RequestOutcome::Success(response) => {
                debug!(thread_id = %response.thread_id, "created chat thread");
                Ok(ThreadId::new(response.thread_id))
            }
            RequestOutcome::Unauthorized => Err(ApiError::Unauthorized),
            other => {
                let error = match other.into_result() {
                    Ok(response) => return Ok(ThreadId::new(response.thread_id)),
                    Err(error) => error,
                };
                let placeholder = ThreadId::placeholder();
                warn!(%error, %placeholder, "create-thread failed, degrading to placeholder");
                Ok(placeholder)
            }
        }
    }
}
