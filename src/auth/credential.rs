// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Credential storage
//!
//! Persists the session credential as a JSON file under the HitCraft home
//! directory, with an in-memory cache for non-blocking reads.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;

/// A session credential: the bearer token plus an optional refresh token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credential {
    /// Opaque session JWT, attached to requests as `Authorization: Bearer`
    pub token: String,

    /// Refresh JWT, exchanged for a new session token on expiry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl Credential {
    /// Create a credential with only a session token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            refresh_token: None,
        }
    }

    /// Create a credential with a session token and refresh token
    pub fn with_refresh(token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            refresh_token: Some(refresh_token.into()),
        }
    }
}

/// File-backed credential store
///
/// Reads go through the cached value; writes persist to disk immediately.
#[derive(Debug)]
pub struct CredentialStore {
    /// Path to the credentials file
    path: PathBuf,
    /// Cached credential
    cached: Option<Credential>,
}

impl CredentialStore {
    /// Open or create a credential store at the given path
    pub fn open(path: PathBuf) -> Result<Self> {
        let cached = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content).ok()
        } else {
            None
        };

        Ok(Self { path, cached })
    }

    /// Get the current credential, if any
    pub fn get(&self) -> Option<&Credential> {
        self.cached.as_ref()
    }

    /// Store a credential, replacing any existing one
    pub fn set(&mut self, credential: Credential) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&credential)?;
        std::fs::write(&self.path, content)?;
        self.cached = Some(credential);
        Ok(())
    }

    /// Wipe the stored credential; idempotent
    pub fn clear(&mut self) {
        self.cached = None;
        if self.path.exists() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                warn!(path = %self.path.display(), error = %e, "failed to remove credentials file");
            }
        }
    }
}
