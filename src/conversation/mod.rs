// ABOUTME: Conversation dispatcher turning one inbound chat message into one reply
// ABOUTME: Routes start keywords, profile messages and goal selections; degrades failures to fixed text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Conversation Dispatcher
//!
//! Every message is classified in a fixed order:
//!
//! 1. a start keyword gets the input format prompt
//! 2. a valid profile is measured, stored and summarised
//! 3. a goal keyword with a stored profile triggers advice generation
//! 4. everything else gets the guidance prompt
//!
//! The handler never fails: parse errors, missing sessions and advice
//! failures all map to fixed replies.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::advice::AdviceGenerator;
use crate::constants::keywords::{START_KEYWORDS, START_KEYWORD_ASCII};
use crate::constants::messages::{
    format_metrics_summary, ADVICE_FALLBACK, GUIDANCE_PROMPT, START_PROMPT,
};
use crate::session::SessionStore;
use tdee_coach_core::models::{Goal, UserProfile};
use tdee_coach_core::parser::{parse_profile, ParseFailure};
use tdee_coach_intelligence::{compute_metrics, ActivityFactors};

/// What an inbound message asks for, before session state is consulted
#[derive(Debug, Clone, PartialEq)]
pub enum InboundIntent {
    /// Message contains a start keyword
    Start,
    /// Message is a complete, valid profile
    Profile(UserProfile),
    /// Message is exactly a goal keyword
    GoalSelection(Goal),
    /// Nothing recognisable; carries the parse failure for diagnostics
    Unrecognized(ParseFailure),
}

/// Classify a message without touching any state
///
/// The text is trimmed before matching.
#[must_use]
pub fn classify(text: &str) -> InboundIntent {
    let text = text.trim();

    if contains_start_keyword(text) {
        return InboundIntent::Start;
    }

    match parse_profile(text) {
        Ok(profile) => InboundIntent::Profile(profile),
        Err(failure) => Goal::from_keyword(text)
            .map_or(InboundIntent::Unrecognized(failure), InboundIntent::GoalSelection),
    }
}

/// `開始`/`开始` match anywhere; `start` only as its own word, so `restart` does not
fn contains_start_keyword(text: &str) -> bool {
    START_KEYWORDS.iter().any(|keyword| text.contains(keyword))
        || text
            .split(|c: char| !c.is_ascii_alphanumeric())
            .any(|word| word.eq_ignore_ascii_case(START_KEYWORD_ASCII))
}

/// Per-message state machine over the session store and advice generator
#[derive(Clone)]
pub struct ConversationHandler {
    sessions: Arc<dyn SessionStore>,
    advice: Arc<dyn AdviceGenerator>,
    activity_factors: ActivityFactors,
}

impl ConversationHandler {
    /// Create a handler using the default activity factors
    #[must_use]
    pub fn new(sessions: Arc<dyn SessionStore>, advice: Arc<dyn AdviceGenerator>) -> Self {
        Self {
            sessions,
            advice,
            activity_factors: ActivityFactors::default(),
        }
    }

    /// Replace the activity factor table
    #[must_use]
    pub const fn with_activity_factors(mut self, activity_factors: ActivityFactors) -> Self {
        self.activity_factors = activity_factors;
        self
    }

    /// Session store backing this handler
    #[must_use]
    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    /// Produce the reply for one inbound text message
    #[instrument(skip(self, text), fields(user.id = %user_id))]
    pub async fn handle_message(&self, user_id: &str, text: &str) -> String {
        match classify(text) {
            InboundIntent::Start => {
                debug!(outcome = "start_prompt", "Start keyword received");
                START_PROMPT.to_owned()
            }
            InboundIntent::Profile(profile) => self.record_profile(user_id, profile).await,
            InboundIntent::GoalSelection(goal) => self.advise(user_id, goal).await,
            InboundIntent::Unrecognized(failure) => {
                debug!(outcome = "guidance", reason = %failure, "Message not understood");
                GUIDANCE_PROMPT.to_owned()
            }
        }
    }

    async fn record_profile(&self, user_id: &str, profile: UserProfile) -> String {
        let metrics = compute_metrics(&profile, &self.activity_factors);
        if !profile.activity_level().is_recognized() {
            debug!(
                activity.label = %profile.activity_level(),
                "Unrecognized activity level stored with fallback factor"
            );
        }
        self.sessions.put(user_id, profile, metrics).await;

        info!(
            outcome = "summary",
            bmi = metrics.bmi,
            bmr = metrics.bmr,
            tdee = metrics.tdee,
            "Profile recorded"
        );
        format_metrics_summary(&metrics)
    }

    async fn advise(&self, user_id: &str, goal: Goal) -> String {
        let Some(session) = self.sessions.get(user_id).await else {
            debug!(outcome = "guidance", goal = %goal, "Goal selected without a profile");
            return GUIDANCE_PROMPT.to_owned();
        };

        match self
            .advice
            .generate_advice(&session.profile, &session.metrics, goal)
            .await
        {
            Ok(advice) => {
                info!(outcome = "advice", goal = %goal, "Advice delivered");
                advice
            }
            Err(e) => {
                warn!(outcome = "advice_fallback", goal = %goal, error = %e, "Advice unavailable");
                ADVICE_FALLBACK.to_owned()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_keyword_wins_over_profile() {
        assert_eq!(classify("開始 男,21,175,70,中等"), InboundIntent::Start);
        assert_eq!(classify("  Start  "), InboundIntent::Start);
        assert_eq!(classify("我要开始"), InboundIntent::Start);
        assert_eq!(classify("please START now"), InboundIntent::Start);
        assert_eq!(classify("我要start"), InboundIntent::Start);
    }

    #[test]
    fn test_start_inside_a_longer_word_is_not_a_keyword() {
        assert_ne!(classify("restart"), InboundIntent::Start);
        assert_ne!(classify("upstart"), InboundIntent::Start);
        assert!(matches!(
            classify("男,21,175,70,upstart"),
            InboundIntent::Profile(_)
        ));
    }

    #[test]
    fn test_goal_keywords_are_classified() {
        assert_eq!(classify(" 1 "), InboundIntent::GoalSelection(Goal::MuscleGain));
        assert_eq!(classify("減脂"), InboundIntent::GoalSelection(Goal::FatLoss));
        assert_eq!(classify("維持"), InboundIntent::GoalSelection(Goal::Maintenance));
    }

    #[test]
    fn test_unrecognized_keeps_parse_failure() {
        assert_eq!(
            classify("hello"),
            InboundIntent::Unrecognized(ParseFailure::FieldCount { found: 1 })
        );
    }
}
