// ABOUTME: Per-user session storage for the most recent profile and its metrics
// ABOUTME: Defines the SessionStore capability and the SessionEntry record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session Store
//!
//! A session is the last successfully parsed profile of a chat user together
//! with the metrics computed from it. The conversation handler writes a
//! session on every valid profile message and reads it when the user picks a
//! goal. A missing session is a normal state ("no profile on file").

mod memory;

pub use memory::InMemorySessionStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use tdee_coach_core::models::{MetricsResult, UserProfile};

/// Stored state for one chat user
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SessionEntry {
    /// Last successfully parsed profile
    pub profile: UserProfile,
    /// Metrics derived from `profile`
    pub metrics: MetricsResult,
    /// When the entry was written
    pub updated_at: DateTime<Utc>,
}

/// Keyed storage for [`SessionEntry`] values
///
/// Implementations must make a `put` visible to every later `get` for the
/// same user id.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store the session for `user_id`, replacing any previous entry
    async fn put(&self, user_id: &str, profile: UserProfile, metrics: MetricsResult);

    /// Fetch the session for `user_id`, if any
    async fn get(&self, user_id: &str) -> Option<SessionEntry>;

    /// Number of users currently stored
    async fn len(&self) -> usize;

    /// Whether no user is stored
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
