// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat message model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::schema::{MessageFragment, MessagePayload, SendMessageRequest};

/// A message in a conversation
///
/// Immutable once created; produced either from a server payload or
/// synthesized locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for the message
    pub id: Uuid,

    /// Message text
    pub content: String,

    /// Who sent the message
    pub sender: Sender,

    /// When the message was created
    pub created_at: DateTime<Utc>,
}

/// Sender of a message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person chatting
    User,
    /// The music assistant
    Assistant,
}

impl Message {
    /// Create a new user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            sender: Sender::User,
            created_at: Utc::now(),
        }
    }

    /// Create a new assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            sender: Sender::Assistant,
            created_at: Utc::now(),
        }
    }

    /// Build a message from a server payload
    ///
    /// Takes the first content fragment as the body. An unparseable or
    /// missing timestamp falls back to now, and an unknown role maps to
    /// assistant, matching the backend's own defaults.
    pub fn from_payload(payload: &MessagePayload) -> Self {
        let content = payload
            .content
            .first()
            .map(|fragment| fragment.text.clone())
            .unwrap_or_default();

        let created_at = DateTime::parse_from_rfc3339(&payload.timestamp)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        let sender = match payload.role.as_str() {
            "user" => Sender::User,
            _ => Sender::Assistant,
        };

        Self {
            id: Uuid::new_v4(),
            content,
            sender,
            created_at,
        }
    }

    /// Convert into the send-message request body
    pub fn to_send_request(&self) -> SendMessageRequest {
        SendMessageRequest {
            content: MessageFragment::text(self.content.clone()),
        }
    }

    /// Whether this message came from the user
    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}
