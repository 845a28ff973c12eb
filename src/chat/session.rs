// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat session
//!
//! Orchestrates thread resolution and message delivery for one
//! conversation, degrading to canned local replies when the backend
//! cannot answer.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::endpoints;
use crate::api::schema::{MessageFragment, SendMessageRequest, SendMessageResponse};
use crate::api::{ApiClient, RequestOutcome};
use crate::chat::fallback::canned_reply;
use crate::chat::message::Message;
use crate::chat::thread::{ThreadId, ThreadResolver};
use crate::error::{ApiError, Result};

/// Text of the synthesized reply when the session has expired
const SESSION_EXPIRED_REPLY: &str = "Your session has expired. Please sign in again.";

/// Where a reply came from
///
/// Makes the degraded-mode path observable instead of indistinguishable
/// prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    /// Parsed from a real backend response
    Server,
    /// Locally generated canned reply
    LocalFallback,
    /// Synthesized because the session is no longer authenticated
    SessionExpired,
}

/// A reply from the assistant, tagged with its provenance
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub message: Message,
    pub source: ReplySource,
}

/// One conversation with an artist's assistant
///
/// Assumes a single in-flight send at a time; callers serialize their own
/// concurrent use (for example by disabling input while a send is pending).
pub struct ChatSession {
    api: Arc<ApiClient>,
    resolver: ThreadResolver,
    active_thread: Option<ThreadId>,
}

impl ChatSession {
    /// Create a session over an API client
    pub fn new(api: Arc<ApiClient>) -> Self {
        let resolver = ThreadResolver::new(api.clone());
        Self {
            api,
            resolver,
            active_thread: None,
        }
    }

    /// The active thread, if one has been resolved
    pub fn active_thread(&self) -> Option<&ThreadId> {
        self.active_thread.as_ref()
    }

    /// Continue a conversation on a known thread
    pub fn resume_thread(&mut self, thread_id: ThreadId) {
        self.active_thread = Some(thread_id);
    }

    /// Reset the session to start a fresh conversation
    pub fn start_new_chat(&mut self) {
        debug!("starting new chat, dropping active thread");
        self.active_thread = None;
    }

    /// Send a message and return the assistant's reply
    ///
    /// Never fails: transient, server, and decode failures all degrade to a
    /// canned local reply. Only an expired session produces the
    /// `SessionExpired` reply, after the executor has cleared the stored
    /// credential.
    pub async fn send_message(&mut self, text: &str, artist_id: &str) -> ChatReply {
        let thread_id = match self
            .resolver
            .resolve(self.active_thread.as_ref(), artist_id)
            .await
        {
            Ok(thread_id) => thread_id,
            Err(ApiError::Unauthorized) => return Self::session_expired_reply(),
            Err(error) => {
                // resolve only surfaces Unauthorized; anything else means the
                // degrade-to-placeholder contract was broken upstream
                warn!(%error, "unexpected resolve failure, falling back locally");
                return Self::fallback_reply(text);
            }
        };
        self.active_thread = Some(thread_id.clone());

        // A placeholder must never reach the server as a thread reference
        if thread_id.is_placeholder() {
            warn!(%thread_id, "no real thread available, answering locally");
            return Self::fallback_reply(text);
        }

        let body = SendMessageRequest {
            content: MessageFragment::text(text),
        };
        let outcome: RequestOutcome<SendMessageResponse> = self
            .api
            .post(&endpoints::chat_messages(thread_id.as_str()), &body)
            .await;

        match outcome {
            RequestOutcome::Success(response) => ChatReply {
                message: Message::from_payload(&response.message),
                source: ReplySource::Server,
            },
            RequestOutcome::Unauthorized => Self::session_expired_reply(),
            other => {
                let error = match other.into_result() {
                    Ok(response) => {
                        return ChatReply {
                            message: Message::from_payload(&response.message),
                            source: ReplySource::Server,
                        }
                    }
                    Err(error) => error,
                };
                warn!(%error, %thread_id, "send failed, answering locally");
                Self::fallback_reply(text)
            }
        }
    }

    /// Fetch past messages for an artist
    ///
    /// The backend has no history endpoint yet; this returns empty to match.
    pub async fn get_history(&self, _artist_id: &str) -> Result<Vec<Message>> {
        Ok(Vec::new())
    }

    fn fallback_reply(text: &str) -> ChatReply {
        ChatReply {
            message: Message::assistant(canned_reply(text)),
            source: ReplySource::LocalFallback,
        }
    }

    fn session_expired_reply() -> ChatReply {
        ChatReply {
            message: Message::assistant(SESSION_EXPIRED_REPLY),
            source: ReplySource::SessionExpired,
        }
    }
}
