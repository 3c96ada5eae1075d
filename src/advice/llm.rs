// ABOUTME: LLM-backed advice generator rendering the health-consultant prompt
// ABOUTME: Sends a single user message at temperature 0.8 and returns the trimmed reply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use super::AdviceGenerator;
use crate::llm::{build_advice_prompt, ChatMessage, ChatRequest, LlmProvider};
use tdee_coach_core::errors::{AppError, AppResult};
use tdee_coach_core::models::{Goal, MetricsResult, UserProfile};

/// Sampling temperature for advice requests
pub const ADVICE_TEMPERATURE: f32 = 0.8;

/// Advice generator that asks an [`LlmProvider`] for a short recommendation
#[derive(Clone)]
pub struct LlmAdviceGenerator {
    provider: Arc<dyn LlmProvider>,
    temperature: f32,
}

impl LlmAdviceGenerator {
    /// Wrap a provider using the default temperature
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            temperature: ADVICE_TEMPERATURE,
        }
    }

    /// Override the sampling temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

#[async_trait]
impl AdviceGenerator for LlmAdviceGenerator {
    #[instrument(skip_all, fields(llm.provider = self.provider.name(), goal = %goal))]
    async fn generate_advice(
        &self,
        profile: &UserProfile,
        metrics: &MetricsResult,
        goal: Goal,
    ) -> AppResult<String> {
        let prompt = build_advice_prompt(profile, metrics, goal);
        let request =
            ChatRequest::new(vec![ChatMessage::user(prompt)]).with_temperature(self.temperature);

        let started = Instant::now();
        let response = self.provider.complete(&request).await.map_err(|e| {
            warn!(error = %e, "Advice generation failed");
            e
        })?;

        let advice = response.content.trim();
        if advice.is_empty() {
            return Err(AppError::external_service(
                self.provider.display_name(),
                "empty advice",
            ));
        }

        info!(
            llm.model = %response.model,
            llm.duration_ms = started.elapsed().as_millis() as u64,
            llm.total_tokens = response.usage.as_ref().map(|u| u.total_tokens),
            "Advice generated"
        );
        Ok(advice.to_owned())
    }
}
