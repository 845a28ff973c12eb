// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Wire types for the chat endpoints
//!
//! One explicit schema type per endpoint body, replacing ad-hoc JSON
//! dictionaries with typed decode failures.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/chat`
#[derive(Debug, Serialize)]
pub struct CreateThreadRequest {
    #[serde(rename = "artistId")]
    pub artist_id: String,
}

/// Response of `POST /api/v1/chat`
#[derive(Debug, Deserialize)]
pub struct CreateThreadResponse {
    #[serde(rename = "threadId")]
    pub thread_id: String,
}

/// One content fragment of a chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageFragment {
    pub text: String,

    /// Fragment type; the backend only emits "text" today
    #[serde(rename = "type", default = "default_fragment_kind")]
    pub kind: String,
}

fn default_fragment_kind() -> String {
    "text".to_string()
}

impl MessageFragment {
    /// Create a text fragment
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: default_fragment_kind(),
        }
    }
}

/// Body of `POST /api/v1/chat/{threadId}/messages`
#[derive(Debug, Serialize)]
pub struct SendMessageRequest {
    pub content: MessageFragment,
}

/// Response of `POST /api/v1/chat/{threadId}/messages`
#[derive(Debug, Deserialize)]
pub struct SendMessageResponse {
    pub message: MessagePayload,
}

/// Server representation of a chat message
#[derive(Debug, Deserialize)]
pub struct MessagePayload {
    /// Content fragments; the first text fragment is the message body
    pub content: Vec<MessageFragment>,

    /// RFC 3339 timestamp
    pub timestamp: String,

    /// "user" or "assistant"
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_thread_request_uses_camel_case() {
        let body = CreateThreadRequest {
            artist_id: "A1".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"artistId": "A1"}));
    }

    #[test]
    fn test_create_thread_response_decode() {
        let body: CreateThreadResponse =
            serde_json::from_str(r#"{"threadId": "T1"}"#).unwrap();
        assert_eq!(body.thread_id, "T1");
    }

    #[test]
    fn test_send_message_request_shape() {
        let body = SendMessageRequest {
            content: MessageFragment::text("need a chord progression"),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "content": {"text": "need a chord progression", "type": "text"}
            })
        );
    }

    #[test]
    fn test_send_message_response_decode() {
        let raw = r#"{
            "message": {
                "content": [{"text": "hi"}],
                "timestamp": "2024-01-01T00:00:00Z",
                "role": "assistant"
            }
        }"#;
        let body: SendMessageResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(body.message.content[0].text, "hi");
        assert_eq!(body.message.content[0].kind, "text");
        assert_eq!(body.message.role, "assistant");
        assert_eq!(body.message.timestamp, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_send_message_response_missing_field_fails() {
        let raw = r#"{"message": {"content": [{"text": "hi"}], "role": "assistant"}}"#;
        assert!(serde_json::from_str::<SendMessageResponse>(raw).is_err());
    }
}
