// ABOUTME: OpenAI-compatible chat completions provider (OpenAI cloud or any compatible endpoint)
// ABOUTME: Bearer-authenticated POST to {base_url}/chat/completions with structured error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `OpenAI`-Compatible Provider
//!
//! Works with the `OpenAI` API and with any server exposing the same
//! `/chat/completions` contract (Azure proxies, Ollama, vLLM, ...).
//!
//! ## Configuration
//!
//! - `OPENAI_API_KEY`: API key (required for the `OpenAI` cloud)
//! - `OPENAI_BASE_URL`: Base URL (default: <https://api.openai.com/v1>)
//! - `OPENAI_MODEL`: Model to use (default: `gpt-4`)

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, TokenUsage};
use tdee_coach_core::errors::{AppError, ErrorCode};

// ============================================================================
// Configuration Constants
// ============================================================================

/// Environment variable for the API key
const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable for the base URL
const OPENAI_BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Environment variable for the model
const OPENAI_MODEL_ENV: &str = "OPENAI_MODEL";

/// Default base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model
const DEFAULT_MODEL: &str = "gpt-4";

/// Service name used in error messages
const SERVICE_NAME: &str = "OpenAI";

/// Connection timeout
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Request timeout; advice must arrive before the LINE reply token expires
const REQUEST_TIMEOUT_SECS: u64 = 25;

// ============================================================================
// API Request/Response Types (OpenAI-compatible format)
// ============================================================================

/// OpenAI-compatible API request structure
#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Message structure for OpenAI-compatible API
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

impl From<&ChatMessage> for OpenAiMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

/// OpenAI-compatible API response structure
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
    #[serde(default)]
    model: Option<String>,
}

/// Choice in response
#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

/// Message in response
#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

/// Usage statistics in response
#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(rename = "prompt_tokens")]
    prompt: u32,
    #[serde(rename = "completion_tokens")]
    completion: u32,
    #[serde(rename = "total_tokens")]
    total: u32,
}

/// Error response structure
#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Configuration for the `OpenAI`-compatible provider
#[derive(Clone)]
pub struct OpenAiCompatibleConfig {
    /// Base URL for the API (e.g., <https://api.openai.com/v1>)
    pub base_url: String,
    /// API key, sent as a bearer token when present
    pub api_key: Option<String>,
    /// Default model to use
    pub default_model: String,
}

impl OpenAiCompatibleConfig {
    /// Read configuration from `OPENAI_API_KEY`, `OPENAI_BASE_URL` and `OPENAI_MODEL`
    #[must_use]
    pub fn from_env() -> Self {
        let non_empty = |name: &str| env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            base_url: non_empty(OPENAI_BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            api_key: non_empty(OPENAI_API_KEY_ENV),
            default_model: non_empty(OPENAI_MODEL_ENV).unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
        }
    }

    /// Whether the configured endpoint is the `OpenAI` cloud
    #[must_use]
    pub fn is_openai_cloud(&self) -> bool {
        self.base_url.contains("api.openai.com")
    }
}

impl Default for OpenAiCompatibleConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: None,
            default_model: DEFAULT_MODEL.to_owned(),
        }
    }
}

impl Debug for OpenAiCompatibleConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("OpenAiCompatibleConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("default_model", &self.default_model)
            .finish()
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Generic `OpenAI`-compatible LLM provider
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: OpenAiCompatibleConfig,
}

impl OpenAiCompatibleProvider {
    /// Create a new provider with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: OpenAiCompatibleConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Create a provider from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `OPENAI_API_KEY` is missing while targeting the
    /// `OpenAI` cloud, or if the HTTP client cannot be created.
    pub fn from_env() -> Result<Self, AppError> {
        let config = OpenAiCompatibleConfig::from_env();

        if config.api_key.is_none() && config.is_openai_cloud() {
            return Err(AppError::new(
                ErrorCode::ConfigMissing,
                format!("{OPENAI_API_KEY_ENV} environment variable not set"),
            ));
        }

        info!(
            base_url = %config.base_url,
            model = %config.default_model,
            "Initializing OpenAI-compatible provider"
        );

        Self::new(config)
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint
        )
    }

    /// Add authorization header if API key is configured
    fn add_auth_header(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(ref api_key) = self.config.api_key {
            request.bearer_auth(api_key)
        } else {
            request
        }
    }

    /// Map a transport failure to an `AppError`
    fn map_send_error(&self, e: &reqwest::Error) -> AppError {
        error!(error = %e, base_url = %self.config.base_url, "Request to LLM endpoint failed");
        if e.is_connect() || e.is_timeout() {
            AppError::external_unavailable(
                SERVICE_NAME,
                format!("Cannot reach {}: {e}", self.config.base_url),
            )
        } else {
            AppError::external_service(SERVICE_NAME, format!("Failed to send request: {e}"))
        }
    }

    /// Parse error response from API
    fn parse_error_response(status: StatusCode, body: &str) -> AppError {
        let Ok(error_response) = serde_json::from_str::<OpenAiErrorResponse>(body) else {
            // Non-JSON error bodies come from proxies and local servers
            return AppError::external_service(
                SERVICE_NAME,
                format!(
                    "API error ({status}): {}",
                    body.chars().take(200).collect::<String>()
                ),
            );
        };

        let message = error_response.error.message;
        match status.as_u16() {
            401 | 403 => AppError::new(
                ErrorCode::ExternalAuthFailed,
                format!("API authentication failed: {message}"),
            ),
            429 => AppError::new(
                ErrorCode::ExternalRateLimited,
                Self::extract_rate_limit_message(&message),
            ),
            404 => AppError::not_found(format!("Model or endpoint ({message})")),
            _ => AppError::external_service(
                SERVICE_NAME,
                format!(
                    "{} - {message}",
                    error_response
                        .error
                        .error_type
                        .as_deref()
                        .unwrap_or("unknown")
                ),
            ),
        }
    }

    /// Extract a user-friendly rate limit message
    ///
    /// `OpenAI` rate limit errors usually contain "Please try again in 20s".
    fn extract_rate_limit_message(message: &str) -> String {
        const RETRY_PREFIX: &str = "try again in ";

        // ASCII lowercasing keeps byte offsets valid for slicing `message`
        let seconds = message
            .to_ascii_lowercase()
            .find(RETRY_PREFIX)
            .map(|pos| &message[pos + RETRY_PREFIX.len()..])
            .and_then(|rest| {
                let end = rest
                    .find(|c: char| !c.is_ascii_digit() && c != '.')
                    .unwrap_or(rest.len());
                rest[..end].parse::<f64>().ok()
            });

        seconds.map_or_else(
            || "LLM rate limit reached. Please wait a moment and try again.".to_owned(),
            |seconds| {
                format!(
                    "LLM rate limit reached. Please try again in {} seconds.",
                    seconds.ceil() as u64
                )
            },
        )
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn display_name(&self) -> &'static str {
        "OpenAI-compatible"
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    #[instrument(skip(self, request), fields(llm.provider = "openai", llm.model = %self.config.default_model))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = self.config.default_model.as_str();

        let openai_request = OpenAiRequest {
            model: model.to_owned(),
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            temperature: request.temperature,
        };

        debug!(
            messages = openai_request.messages.len(),
            "Sending chat completion request"
        );

        let http_request = self
            .client
            .post(self.api_url("chat/completions"))
            .json(&openai_request);

        let response = self
            .add_auth_header(http_request)
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::external_service(SERVICE_NAME, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            warn!(status = %status, "Chat completion request rejected");
            return Err(Self::parse_error_response(status, &body));
        }

        let openai_response: OpenAiResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to parse chat completion response");
            AppError::external_service(SERVICE_NAME, format!("Failed to parse response: {e}"))
        })?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service(SERVICE_NAME, "API returned no choices"))?;

        let content = choice
            .message
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| AppError::external_service(SERVICE_NAME, "API returned empty content"))?;

        debug!(
            chars = content.chars().count(),
            finish_reason = ?choice.finish_reason,
            "Received chat completion"
        );

        Ok(ChatResponse {
            content,
            model: openai_response.model.unwrap_or_else(|| model.to_owned()),
            usage: openai_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt,
                completion_tokens: u.completion,
                total_tokens: u.total,
            }),
            finish_reason: choice.finish_reason,
        })
    }
}

impl Debug for OpenAiCompatibleProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("OpenAiCompatibleProvider")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_message_extracts_seconds() {
        let message = "Rate limit reached for gpt-4. Please try again in 20.5s.";
        assert_eq!(
            OpenAiCompatibleProvider::extract_rate_limit_message(message),
            "LLM rate limit reached. Please try again in 21 seconds."
        );
    }

    #[test]
    fn test_error_status_mapping() {
        let body = r#"{"error":{"message":"Incorrect API key","type":"invalid_request_error"}}"#;
        let error = OpenAiCompatibleProvider::parse_error_response(StatusCode::UNAUTHORIZED, body);
        assert_eq!(error.code, ErrorCode::ExternalAuthFailed);

        let error =
            OpenAiCompatibleProvider::parse_error_response(StatusCode::BAD_GATEWAY, "<html>");
        assert_eq!(error.code, ErrorCode::ExternalServiceError);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = OpenAiCompatibleConfig {
            api_key: Some("sk-secret".to_owned()),
            ..OpenAiCompatibleConfig::default()
        };
        assert!(!format!("{config:?}").contains("sk-secret"));
    }
}
