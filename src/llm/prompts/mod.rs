// ABOUTME: Prompt templates for LLM interactions loaded at compile time
// ABOUTME: Renders the health-consultant advice prompt from a profile, its metrics and a goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.

use crate::constants::messages::format_decimal;
use tdee_coach_core::models::{Goal, MetricsResult, UserProfile};

/// Advice prompt template with `{placeholder}` slots
///
/// Asks for a friendly 100-150 character answer covering nutrition
/// (protein and calories), training (frequency and content) and habits to
/// avoid.
pub const ADVICE_PROMPT_TEMPLATE: &str = include_str!("advice_prompt.md");

/// Render the advice prompt for one user
#[must_use]
pub fn build_advice_prompt(profile: &UserProfile, metrics: &MetricsResult, goal: Goal) -> String {
    ADVICE_PROMPT_TEMPLATE
        .replace("{gender}", profile.gender().label())
        .replace("{age}", &profile.age_years().to_string())
        .replace("{height}", &profile.height_cm().to_string())
        .replace("{weight}", &format_decimal(profile.weight_kg()))
        .replace("{activity}", profile.activity_level().label())
        .replace("{goal}", goal.label())
        .replace("{bmi}", &format_decimal(metrics.bmi))
        .replace("{bmr}", &metrics.bmr.to_string())
        .replace("{tdee}", &metrics.tdee.to_string())
}
