// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Session credentials and token lifecycle
//!
//! Owns the bearer token used to authorize API calls: durable storage,
//! refresh-token exchange, and logout.

pub mod credential;
pub mod provider;

pub use credential::{Credential, CredentialStore};
pub use provider::TokenProvider;
