// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Request outcome classification
//!
//! Tagged result of a single HTTP call, so callers branch on the failure
//! class rather than inspecting status codes themselves.

use crate::error::ApiError;

/// Outcome of one executed request
#[derive(Debug)]
pub enum RequestOutcome<T> {
    /// 2xx with a decodable body
    Success(T),

    /// 401, or no credential was available to attach
    Unauthorized,

    /// 403, with a body-derived message when one exists
    Forbidden(Option<String>),

    /// Any other non-2xx status
    ServerError { status: u16, message: String },

    /// Transport failure, timeout, or 503
    Transient(TransientFailure),

    /// 2xx whose body did not match the expected schema
    DecodeFailure(String),

    /// Request rejected with field-level validation messages
    Validation(Vec<String>),
}

/// The two transient failure classes
#[derive(Debug)]
pub enum TransientFailure {
    /// Transport-level failure (DNS, connection reset, timeout)
    Network(String),

    /// Backend answered 503
    ServiceUnavailable,
}

impl<T> RequestOutcome<T> {
    /// Convert into the error taxonomy, keeping the success payload
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            RequestOutcome::Success(payload) => Ok(payload),
            RequestOutcome::Unauthorized => Err(ApiError::Unauthorized),
            RequestOutcome::Forbidden(message) => Err(ApiError::Forbidden(message)),
            RequestOutcome::ServerError { status, message } => {
                Err(ApiError::ServerError { status, message })
            }
            RequestOutcome::Transient(TransientFailure::Network(message)) => {
                Err(ApiError::Network(message))
            }
            RequestOutcome::Transient(TransientFailure::ServiceUnavailable) => {
                Err(ApiError::ServerUnavailable)
            }
            RequestOutcome::DecodeFailure(message) => Err(ApiError::Decode(message)),
            RequestOutcome::Validation(messages) => Err(ApiError::Validation(messages)),
        }
    }

    /// Whether this outcome is worth retrying at the caller's discretion
    pub fn is_transient(&self) -> bool {
        matches!(self, RequestOutcome::Transient(_))
    }
}
