// ABOUTME: Unified LLM provider selector for runtime provider switching
// ABOUTME: Wraps the OpenAI-compatible and Gemini providers behind one type chosen from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # LLM Provider Selector
//!
//! Set `TDEE_COACH_LLM_PROVIDER` to choose the backend:
//! - `openai` (default): `OpenAiCompatibleProvider` (`OPENAI_API_KEY`, `OPENAI_BASE_URL`, `OPENAI_MODEL`)
//! - `gemini`: `GeminiProvider` (`GEMINI_API_KEY`, `GEMINI_MODEL`)

use std::fmt;

use async_trait::async_trait;
use tracing::info;

use super::{ChatRequest, ChatResponse, GeminiProvider, LlmProvider, OpenAiCompatibleProvider};
use crate::config::LlmProviderType;
use tdee_coach_core::errors::AppError;

/// Unified chat provider that wraps Gemini or an `OpenAI`-compatible endpoint
pub enum ChatProvider {
    /// Google Gemini provider
    Gemini(GeminiProvider),
    /// `OpenAI` or any `OpenAI`-compatible endpoint
    OpenAi(OpenAiCompatibleProvider),
}

impl ChatProvider {
    /// Create a provider from environment configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the selected provider's API key is missing.
    pub fn from_env() -> Result<Self, AppError> {
        let provider_type = LlmProviderType::from_env();

        info!(
            "Initializing LLM provider: {} (set {} to change)",
            provider_type,
            LlmProviderType::ENV_VAR
        );

        let provider = Self::create_provider(provider_type)?;
        info!(
            llm.provider = provider.name(),
            llm.model = provider.default_model(),
            "LLM provider ready"
        );
        Ok(provider)
    }

    /// Create a provider for a specific type
    ///
    /// # Errors
    ///
    /// Returns an error if the provider's API key is missing.
    pub fn create_provider(provider_type: LlmProviderType) -> Result<Self, AppError> {
        match provider_type {
            LlmProviderType::OpenAi => Ok(Self::OpenAi(OpenAiCompatibleProvider::from_env()?)),
            LlmProviderType::Gemini => Ok(Self::Gemini(GeminiProvider::from_env()?)),
        }
    }

    /// Get the provider type
    #[must_use]
    pub const fn provider_type(&self) -> LlmProviderType {
        match self {
            Self::Gemini(_) => LlmProviderType::Gemini,
            Self::OpenAi(_) => LlmProviderType::OpenAi,
        }
    }
}

impl fmt::Debug for ChatProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gemini(p) => f.debug_tuple("ChatProvider::Gemini").field(p).finish(),
            Self::OpenAi(p) => f.debug_tuple("ChatProvider::OpenAi").field(p).finish(),
        }
    }
}

// Delegate to the wrapped provider so ChatProvider can be used as a trait object
#[async_trait]
impl LlmProvider for ChatProvider {
    fn name(&self) -> &'static str {
        match self {
            Self::Gemini(p) => p.name(),
            Self::OpenAi(p) => p.name(),
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Self::Gemini(p) => p.display_name(),
            Self::OpenAi(p) => p.display_name(),
        }
    }

    fn default_model(&self) -> &str {
        match self {
            Self::Gemini(p) => p.default_model(),
            Self::OpenAi(p) => p.default_model(),
        }
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        match self {
            Self::Gemini(p) => p.complete(request).await,
            Self::OpenAi(p) => p.complete(request).await,
        }
    }
}
