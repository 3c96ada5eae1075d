// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, scripted advice generators and a recording reply client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `tdee_coach`

use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use tdee_coach::{
    advice::AdviceGenerator,
    conversation::ConversationHandler,
    errors::{AppError, AppResult},
    line::{LineReplyClient, LineSignatureValidator},
    models::{Goal, MetricsResult, UserProfile},
    resources::ServerResources,
    session::InMemorySessionStore,
};

static INIT_LOGGER: Once = Once::new();

/// Channel secret used to sign webhook bodies in tests
pub const TEST_CHANNEL_SECRET: &str = "test-channel-secret";

/// Advice text returned by [`StubAdviceGenerator`]
pub const STUB_ADVICE: &str = "多吃蛋白質，每週重訓三次。";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Arguments of one `generate_advice` call
#[derive(Debug, Clone)]
pub struct AdviceCall {
    pub profile: UserProfile,
    pub metrics: MetricsResult,
    pub goal: Goal,
}

/// Advice generator that records its calls and returns [`STUB_ADVICE`]
#[derive(Default)]
pub struct StubAdviceGenerator {
    calls: Mutex<Vec<AdviceCall>>,
}

impl StubAdviceGenerator {
    pub fn calls(&self) -> Vec<AdviceCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AdviceGenerator for StubAdviceGenerator {
    async fn generate_advice(
        &self,
        profile: &UserProfile,
        metrics: &MetricsResult,
        goal: Goal,
    ) -> AppResult<String> {
        self.calls.lock().unwrap().push(AdviceCall {
            profile: profile.clone(),
            metrics: *metrics,
            goal,
        });
        Ok(STUB_ADVICE.to_owned())
    }
}

/// Advice generator that always fails like an unreachable LLM
pub struct FailingAdviceGenerator;

#[async_trait]
impl AdviceGenerator for FailingAdviceGenerator {
    async fn generate_advice(
        &self,
        _profile: &UserProfile,
        _metrics: &MetricsResult,
        _goal: Goal,
    ) -> AppResult<String> {
        Err(AppError::external_unavailable("LLM", "connection refused"))
    }
}

/// Reply client that records `(reply_token, text)` pairs instead of calling LINE
#[derive(Default)]
pub struct RecordingReplyClient {
    replies: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl RecordingReplyClient {
    /// A client whose every reply fails after being recorded
    pub fn failing() -> Self {
        Self {
            replies: Mutex::default(),
            fail: true,
        }
    }

    pub fn replies(&self) -> Vec<(String, String)> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl LineReplyClient for RecordingReplyClient {
    async fn reply_text(&self, reply_token: &str, text: &str) -> AppResult<()> {
        self.replies
            .lock()
            .unwrap()
            .push((reply_token.to_owned(), text.to_owned()));
        if self.fail {
            return Err(AppError::external_service("LINE", "Invalid reply token"));
        }
        Ok(())
    }
}

/// Conversation handler over a fresh in-memory store
pub fn create_test_handler(advice: Arc<dyn AdviceGenerator>) -> ConversationHandler {
    init_test_logging();
    ConversationHandler::new(Arc::new(InMemorySessionStore::default()), advice)
}

/// Server resources signing with [`TEST_CHANNEL_SECRET`]
pub fn create_test_server_resources(
    advice: Arc<dyn AdviceGenerator>,
    reply_client: Arc<dyn LineReplyClient>,
) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(
        create_test_handler(advice),
        reply_client,
        LineSignatureValidator::new(TEST_CHANNEL_SECRET),
    ))
}

/// Signature LINE would send for `body`
pub fn sign_body(body: &str) -> String {
    LineSignatureValidator::new(TEST_CHANNEL_SECRET).sign(body.as_bytes())
}
