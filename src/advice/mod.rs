// ABOUTME: Advice generation capability used when a user picks a goal
// ABOUTME: Defines the AdviceGenerator trait and its LLM-backed implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Advice Generation
//!
//! The conversation handler depends only on [`AdviceGenerator`]; any error it
//! returns is replaced by a fixed apology before reaching the user.

mod llm;

pub use llm::LlmAdviceGenerator;

use async_trait::async_trait;

use tdee_coach_core::errors::AppResult;
use tdee_coach_core::models::{Goal, MetricsResult, UserProfile};

/// Produces personalised advice for a profile, its metrics and a goal
#[async_trait]
pub trait AdviceGenerator: Send + Sync {
    /// Generate advice text to relay verbatim to the user
    async fn generate_advice(
        &self,
        profile: &UserProfile,
        metrics: &MetricsResult,
        goal: Goal,
    ) -> AppResult<String>;
}
