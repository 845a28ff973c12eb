// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! HitCraft REST API layer
//!
//! Request execution with bearer-token authorization, typed endpoint
//! schemas, and response classification.

pub mod client;
pub mod endpoints;
pub mod outcome;
pub mod schema;

pub use client::ApiClient;
pub use outcome::{RequestOutcome, TransientFailure};
