// ABOUTME: Integration tests for the LINE reply API client
// ABOUTME: Verifies request shape, bearer auth, truncation and status mapping against a local server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tdee_coach::errors::ErrorCode;
use tdee_coach::line::{LineMessagingClient, LineReplyClient, MAX_TEXT_MESSAGE_CHARS};
use tokio::net::TcpListener;

type Captured = Arc<Mutex<Vec<(Option<String>, Value)>>>;

#[derive(Clone)]
struct ReplyServer {
    status: StatusCode,
    captured: Captured,
}

async fn reply_handler(
    State(server): State<ReplyServer>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    server.captured.lock().unwrap().push((auth, body));
    let response = if server.status.is_success() {
        json!({})
    } else {
        json!({"message": "Invalid reply token"})
    };
    (server.status, Json(response))
}

async fn client_for(status: StatusCode) -> (LineMessagingClient, Captured) {
    common::init_test_logging();
    let captured: Captured = Arc::default();
    let app = Router::new()
        .route("/v2/bot/message/reply", post(reply_handler))
        .with_state(ReplyServer {
            status,
            captured: captured.clone(),
        });
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = LineMessagingClient::new("channel-token")
        .unwrap()
        .with_reply_url(format!("http://{addr}/v2/bot/message/reply"));
    (client, captured)
}

#[tokio::test]
async fn test_reply_request_shape() {
    let (client, captured) = client_for(StatusCode::OK).await;

    client.reply_text("reply-token-1", "你好").await.unwrap();

    let captured = captured.lock().unwrap();
    assert_eq!(captured.len(), 1);
    let (auth, body) = &captured[0];
    assert_eq!(auth.as_deref(), Some("Bearer channel-token"));
    assert_eq!(
        body,
        &json!({"replyToken": "reply-token-1", "messages": [{"type": "text", "text": "你好"}]})
    );
}

#[tokio::test]
async fn test_long_reply_is_truncated() {
    let (client, captured) = client_for(StatusCode::OK).await;
    let long = "字".repeat(MAX_TEXT_MESSAGE_CHARS + 100);

    client.reply_text("t", &long).await.unwrap();

    let captured = captured.lock().unwrap();
    let sent = captured[0].1["messages"][0]["text"].as_str().unwrap();
    assert_eq!(sent.chars().count(), MAX_TEXT_MESSAGE_CHARS);
}

#[tokio::test]
async fn test_rejected_reply_maps_status() {
    let (client, _) = client_for(StatusCode::BAD_REQUEST).await;
    let error = client.reply_text("expired", "hi").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert!(error.message.contains("Invalid reply token"));

    let (client, _) = client_for(StatusCode::UNAUTHORIZED).await;
    let error = client.reply_text("t", "hi").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalAuthFailed);
}
