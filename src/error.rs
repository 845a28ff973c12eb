// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for the HitCraft client
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for HitCraft operations
#[derive(Error, Debug)]
pub enum HitcraftError {
    /// API-related errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Authentication errors
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// API-specific error types
///
/// One variant per failure class the backend can produce, so callers match on
/// the class instead of string-sniffing messages.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request path could not be joined into a valid URL
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// Transport-level failure (DNS, connection reset, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API returned a non-2xx status not covered by a more specific variant
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Response body could not be decoded into the expected type
    #[error("Data processing error: {0}")]
    Decode(String),

    /// Session token missing, expired, or rejected (401)
    #[error("Session expired. Please sign in again.")]
    Unauthorized,

    /// Access denied (403)
    #[error("Access denied: {}", .0.as_deref().unwrap_or("check your permissions"))]
    Forbidden(Option<String>),

    /// Service temporarily unavailable (503)
    #[error("Service temporarily unavailable. Please try again later.")]
    ServerUnavailable,

    /// Request rejected with field-level validation messages
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Authentication-specific error types
#[derive(Error, Debug)]
pub enum AuthError {
    /// No refresh token stored, or the exchange was rejected
    #[error("Not authenticated")]
    Unauthorized,

    /// Network failure during the token exchange
    #[error("Auth network error: {0}")]
    Network(String),

    /// Token endpoint returned an unusable response
    #[error("Invalid auth response: {0}")]
    InvalidResponse(String),
}

/// Result type alias for HitCraft operations
pub type Result<T> = std::result::Result<T, HitcraftError>;
