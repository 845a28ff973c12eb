// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! HitCraft - chat and music-assistant client for the HitCraft API.
//!
//! This crate exposes the client runtime used by the `hitcraft` CLI:
//! - `auth`: session credential storage, refresh exchange, logout
//! - `api`: authorized request execution and response classification
//! - `chat`: thread resolution and the send/fallback conversation flow
//! - `artist`: typed access to the artist endpoints
//!
//! The degraded-mode behavior is deliberate: when the backend cannot
//! answer, `ChatSession` returns a locally generated reply tagged with
//! [`chat::ReplySource::LocalFallback`] rather than an error, keeping the
//! dialogue moving while staying observable to callers and logs.

pub mod api;
pub mod artist;
pub mod auth;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
