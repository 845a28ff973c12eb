// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Artist API
//!
//! Lookup and profile updates for the artists a chat can be held with.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::{endpoints, ApiClient};
use crate::error::ApiError;

/// An artist profile as served by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfile {
    pub id: String,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Assistant instructions attached to this artist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ArtistRole>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_genres: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub famous_works: Option<Vec<String>>,
}

/// Primary and secondary roles of an artist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRole {
    pub primary: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Vec<String>>,
}

impl ArtistProfile {
    /// Comma-joined genre list for display
    pub fn genres_list(&self) -> String {
        self.preferred_genres
            .as_ref()
            .filter(|genres| !genres.is_empty())
            .map(|genres| genres.join(", "))
            .unwrap_or_else(|| "No genres specified".to_string())
    }

    /// Short bio for display
    pub fn short_bio(&self) -> &str {
        self.about.as_deref().unwrap_or("No bio available")
    }
}

/// Response of `GET /api/v1/artist`: profiles keyed by artist id
#[derive(Debug, Deserialize)]
struct ArtistsResponse {
    artists: HashMap<String, ArtistProfile>,
}

/// Body of the instructions update endpoint
#[derive(Debug, Serialize)]
struct UpdateInstructionsRequest {
    instructions: String,
}

/// Typed access to the artist endpoints
pub struct ArtistApi {
    api: Arc<ApiClient>,
}

impl ArtistApi {
    /// Create an artist API over a client
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// List all artists, sorted by name
    pub async fn list(&self) -> Result<Vec<ArtistProfile>, ApiError> {
        let response: ArtistsResponse = self.api.get(endpoints::ARTISTS).await.into_result()?;
        let mut artists: Vec<ArtistProfile> = response.artists.into_values().collect();
        artists.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(artists)
    }

    /// Fetch a single artist profile
    pub async fn get(&self, artist_id: &str) -> Result<ArtistProfile, ApiError> {
        self.api
            .get(&endpoints::artist(artist_id))
            .await
            .into_result()
    }

    /// Replace the artist's assistant instructions
    pub async fn update_instructions(
        &self,
        artist_id: &str,
        instructions: &str,
    ) -> Result<ArtistProfile, ApiError> {
        let body = UpdateInstructionsRequest {
            instructions: instructions.to_string(),
        };
        self.api
            .post(&endpoints::artist_instructions(artist_id), &body)
            .await
            .into_result()
    }

    /// Patch arbitrary profile info fields
    pub async fn update_info(
        &self,
        artist_id: &str,
        info: &serde_json::Value,
    ) -> Result<ArtistProfile, ApiError> {
        self.api
            .post(&endpoints::artist_info(artist_id), info)
            .await
            .into_result()
    }
}
