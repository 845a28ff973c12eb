// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! End-to-end chat flow tests against a mock backend
//!
//! Exercises the full session flow: thread resolution, authorized sends,
//! and the degraded-mode fallbacks.

use std::sync::Arc;

use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hitcraft::api::ApiClient;
use hitcraft::auth::{Credential, CredentialStore, TokenProvider};
use hitcraft::chat::{ChatSession, ReplySource, Sender, ThreadId};

fn token_provider(dir: &TempDir) -> Arc<TokenProvider> {
    let store = CredentialStore::open(dir.path().join("credentials.json")).unwrap();
    Arc::new(TokenProvider::with_store(store, "http://unused", 5).unwrap())
}

fn signed_in_provider(dir: &TempDir) -> Arc<TokenProvider> {
    let tokens = token_provider(dir);
    tokens.set_credential(Credential::new("test-jwt")).unwrap();
    tokens
}

fn session_against(server_uri: &str, tokens: Arc<TokenProvider>) -> ChatSession {
    let api = ApiClient::with_base_url(server_uri, "https://app.hitcraft.ai", 5, tokens).unwrap();
    ChatSession::new(Arc::new(api))
}

fn assistant_payload(text: &str, timestamp: &str) -> serde_json::Value {
    serde_json::json!({
        "message": {
            "content": [{"text": text, "type": "text"}],
            "timestamp": timestamp,
            "role": "assistant"
        }
    })
}

#[tokio::test]
async fn send_on_existing_thread_parses_server_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/T1/messages"))
        .and(header("Authorization", "Bearer test-jwt"))
        .and(body_json(serde_json::json!({
            "content": {"text": "hello", "type": "text"}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(assistant_payload("hi", "2024-01-01T00:00:00Z")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut session = session_against(&server.uri(), signed_in_provider(&dir));
    session.resume_thread(ThreadId::new("T1"));

    let reply = session.send_message("hello", "A1").await;

    assert_eq!(reply.source, ReplySource::Server);
    assert_eq!(reply.message.content, "hi");
    assert_eq!(reply.message.sender, Sender::Assistant);
    assert_eq!(
        reply.message.created_at.to_rfc3339(),
        "2024-01-01T00:00:00+00:00"
    );
}

#[tokio::test]
async fn existing_real_thread_skips_thread_creation() {
    let server = MockServer::start().await;
    // The create-thread endpoint must never be hit
    Mock::given(method("POST"))
        .and(path("/api/v1/chat"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/T1/messages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(assistant_payload("hi", "2024-01-01T00:00:00Z")),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut session = session_against(&server.uri(), signed_in_provider(&dir));
    session.resume_thread(ThreadId::new("T1"));

    let reply = session.send_message("hello", "A1").await;
    assert_eq!(reply.source, ReplySource::Server);
}

#[tokio::test]
async fn first_send_creates_thread_then_posts_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat"))
        .and(body_json(serde_json::json!({"artistId": "A1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "threadId": "T9"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/T9/messages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(assistant_payload("welcome", "2024-01-01T00:00:00Z")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut session = session_against(&server.uri(), signed_in_provider(&dir));

    let reply = session.send_message("hello", "A1").await;
    assert_eq!(reply.source, ReplySource::Server);
    assert_eq!(reply.message.content, "welcome");
    assert_eq!(session.active_thread().unwrap().as_str(), "T9");
}

#[tokio::test]
async fn create_thread_failure_degrades_to_canned_reply() {
    // No server listening at all: create-thread is a transport failure
    let dir = TempDir::new().unwrap();
    let mut session = session_against("http://127.0.0.1:9", signed_in_provider(&dir));

    let reply = session.send_message("need a chord progression", "A1").await;

    assert_eq!(reply.source, ReplySource::LocalFallback);
    assert_eq!(reply.message.sender, Sender::Assistant);
    assert!(reply.message.content.contains("I-V-vi-IV"));
    // The placeholder never reaches the server and is retried next send
    assert!(session.active_thread().unwrap().is_placeholder());
}

#[tokio::test]
async fn placeholder_thread_recovers_once_backend_returns() {
    let server = MockServer::start().await;
    // First create attempt fails, second succeeds
    Mock::given(method("POST"))
        .and(path("/api/v1/chat"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "threadId": "T3"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/T3/messages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(assistant_payload("back online", "2024-01-01T00:00:00Z")),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut session = session_against(&server.uri(), signed_in_provider(&dir));

    let first = session.send_message("hello", "A1").await;
    assert_eq!(first.source, ReplySource::LocalFallback);
    assert!(session.active_thread().unwrap().is_placeholder());

    let second = session.send_message("hello again", "A1").await;
    assert_eq!(second.source, ReplySource::Server);
    assert_eq!(session.active_thread().unwrap().as_str(), "T3");
}

#[tokio::test]
async fn send_failure_on_real_thread_degrades_to_canned_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/T1/messages"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut session = session_against(&server.uri(), signed_in_provider(&dir));
    session.resume_thread(ThreadId::new("T1"));

    let reply = session.send_message("how do I mix vocals", "A1").await;
    assert_eq!(reply.source, ReplySource::LocalFallback);
    assert!(reply.message.content.contains("space for each element"));
}

#[tokio::test]
async fn undecodable_send_response_degrades_to_canned_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/T1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "unexpected": "shape"
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut session = session_against(&server.uri(), signed_in_provider(&dir));
    session.resume_thread(ThreadId::new("T1"));

    let reply = session.send_message("write me a verse", "A1").await;
    assert_eq!(reply.source, ReplySource::LocalFallback);
    assert!(reply.message.content.contains("hook"));
}

#[tokio::test]
async fn missing_credential_takes_session_expired_path() {
    let server = MockServer::start().await;
    // No request must ever leave the client without a credential
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let tokens = token_provider(&dir);
    let mut session = session_against(&server.uri(), tokens.clone());

    let reply = session.send_message("hello", "A1").await;

    assert_eq!(reply.source, ReplySource::SessionExpired);
    assert!(reply.message.content.contains("session has expired"));
    assert!(tokens.current_token().is_none());
}

#[tokio::test]
async fn rejected_token_clears_credential_and_expires_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let tokens = signed_in_provider(&dir);
    let mut session = session_against(&server.uri(), tokens.clone());

    let reply = session.send_message("hello", "A1").await;

    assert_eq!(reply.source, ReplySource::SessionExpired);
    assert!(reply.message.content.contains("session has expired"));
    assert!(tokens.current_token().is_none());
}

#[tokio::test]
async fn rejected_token_on_send_expires_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/T1/messages"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let tokens = signed_in_provider(&dir);
    let mut session = session_against(&server.uri(), tokens.clone());
    session.resume_thread(ThreadId::new("T1"));

    let reply = session.send_message("hello", "A1").await;

    assert_eq!(reply.source, ReplySource::SessionExpired);
    assert!(tokens.current_token().is_none());
}

#[tokio::test]
async fn start_new_chat_resets_thread() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "threadId": "T5"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/T5/messages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(assistant_payload("ok", "2024-01-01T00:00:00Z")),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut session = session_against(&server.uri(), signed_in_provider(&dir));

    session.send_message("hello", "A1").await;
    assert!(session.active_thread().is_some());

    session.start_new_chat();
    assert!(session.active_thread().is_none());
}

#[tokio::test]
async fn history_is_empty_stub() {
    let dir = TempDir::new().unwrap();
    let session = session_against("http://127.0.0.1:9", signed_in_provider(&dir));

    let history = session.get_history("A1").await.unwrap();
    assert!(history.is_empty());
}
