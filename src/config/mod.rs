// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Application settings
//!
//! Base URLs and request parameters, persisted as JSON under the HitCraft
//! home directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default API base URL
const DEFAULT_API_BASE_URL: &str = "https://api.hitcraft.ai";

/// Default auth base URL (token refresh endpoint lives here)
const DEFAULT_AUTH_BASE_URL: &str = "https://auth.hitcraft.ai";

/// Default web app URL, sent as the Origin header
const DEFAULT_WEB_APP_URL: &str = "https://app.hitcraft.ai";

/// Default per-request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the HitCraft REST API
    pub api_base_url: String,

    /// Base URL of the auth service
    pub auth_base_url: String,

    /// Web app URL, used as the Origin header on API requests
    pub web_app_url: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            web_app_url: DEFAULT_WEB_APP_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Get the HitCraft home directory (~/.hitcraft or $HITCRAFT_HOME).
    pub fn hitcraft_home() -> PathBuf {
        if let Ok(home) = std::env::var("HITCRAFT_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hitcraft")
    }

    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::hitcraft_home().join("settings.json")
    }

    /// Get the credentials file path.
    pub fn credentials_path() -> PathBuf {
        Self::hitcraft_home().join("credentials.json")
    }

    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
