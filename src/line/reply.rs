// ABOUTME: LINE reply API client sending one text message per webhook event
// ABOUTME: Bearer-authenticated reqwest client with status-code aware error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use super::models::{OutgoingMessage, ReplyMessageRequest};
use crate::constants::line_api::REPLY_URL;
use tdee_coach_core::errors::{AppError, AppResult, ErrorCode};

/// LINE rejects text messages longer than this many characters
pub const MAX_TEXT_MESSAGE_CHARS: usize = 5000;

/// Request timeout for the reply API
const REPLY_TIMEOUT_SECS: u64 = 10;

/// Sends replies to webhook events
#[async_trait]
pub trait LineReplyClient: Send + Sync {
    /// Reply to an event with a single text message
    async fn reply_text(&self, reply_token: &str, text: &str) -> AppResult<()>;
}

/// reqwest-backed client for the LINE Messaging API
pub struct LineMessagingClient {
    client: Client,
    channel_access_token: String,
    reply_url: String,
}

impl LineMessagingClient {
    /// Create a client for the production reply endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(channel_access_token: impl Into<String>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REPLY_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            channel_access_token: channel_access_token.into(),
            reply_url: REPLY_URL.to_owned(),
        })
    }

    /// Send replies to a different endpoint (tests, proxies)
    #[must_use]
    pub fn with_reply_url(mut self, reply_url: impl Into<String>) -> Self {
        self.reply_url = reply_url.into();
        self
    }

    /// Map a non-success reply API status to an `AppError`
    fn map_status_error(status: u16, body: &str) -> AppError {
        let detail: String = body.chars().take(200).collect();
        match status {
            401 | 403 => AppError::new(
                ErrorCode::ExternalAuthFailed,
                format!("LINE rejected the channel access token: {detail}"),
            ),
            429 => AppError::new(
                ErrorCode::ExternalRateLimited,
                format!("LINE reply rate limit reached: {detail}"),
            ),
            _ => AppError::external_service("LINE", format!("Reply failed ({status}): {detail}")),
        }
    }
}

/// Cut `text` to LINE's per-message character limit
#[must_use]
pub fn truncate_for_line(text: &str) -> &str {
    text.char_indices()
        .nth(MAX_TEXT_MESSAGE_CHARS)
        .map_or(text, |(byte_index, _)| &text[..byte_index])
}

#[async_trait]
impl LineReplyClient for LineMessagingClient {
    #[instrument(skip(self, reply_token, text), fields(chars = text.chars().count()))]
    async fn reply_text(&self, reply_token: &str, text: &str) -> AppResult<()> {
        let request = ReplyMessageRequest {
            reply_token,
            messages: vec![OutgoingMessage::Text {
                text: truncate_for_line(text),
            }],
        };

        let response = self
            .client
            .post(&self.reply_url)
            .bearer_auth(&self.channel_access_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::external_unavailable("LINE", format!("Reply request failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            debug!("Reply delivered");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(Self::map_status_error(status.as_u16(), &body))
    }
}

impl Debug for LineMessagingClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LineMessagingClient")
            .field("reply_url", &self.reply_url)
            .field("channel_access_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let long = "營".repeat(MAX_TEXT_MESSAGE_CHARS + 10);
        assert_eq!(truncate_for_line(&long).chars().count(), MAX_TEXT_MESSAGE_CHARS);
        assert_eq!(truncate_for_line("短訊息"), "短訊息");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            LineMessagingClient::map_status_error(401, "").code,
            ErrorCode::ExternalAuthFailed
        );
        assert_eq!(
            LineMessagingClient::map_status_error(429, "").code,
            ErrorCode::ExternalRateLimited
        );
        assert_eq!(
            LineMessagingClient::map_status_error(400, "Invalid reply token").code,
            ErrorCode::ExternalServiceError
        );
    }
}
