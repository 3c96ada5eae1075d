// ABOUTME: In-memory session store with LRU eviction behind a tokio RwLock
// ABOUTME: Process-lifetime storage; sessions are lost on restart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::num::NonZeroUsize;

use async_trait::async_trait;
use chrono::Utc;
use lru::LruCache;
use tokio::sync::RwLock;
use tracing::debug;

use super::{SessionEntry, SessionStore};
use crate::constants::env_config::DEFAULT_SESSION_STORE_CAPACITY;
use tdee_coach_core::models::{MetricsResult, UserProfile};

/// In-memory session store with LRU eviction
///
/// A single lock guards the whole map, so a `put` followed by a `get` for the
/// same user always observes the write. Once `capacity` users are stored the
/// least recently used one is evicted.
pub struct InMemorySessionStore {
    store: RwLock<LruCache<String, SessionEntry>>,
}

impl InMemorySessionStore {
    /// Fallback capacity when zero is requested
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_SESSION_STORE_CAPACITY)
    {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a store holding at most `capacity` users
    ///
    /// A capacity of zero falls back to the default of 10 000.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            store: RwLock::new(LruCache::new(capacity)),
        }
    }

    /// Maximum number of users kept
    pub async fn capacity(&self) -> usize {
        self.store.read().await.cap().get()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_STORE_CAPACITY)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(&self, user_id: &str, profile: UserProfile, metrics: MetricsResult) {
        let entry = SessionEntry {
            profile,
            metrics,
            updated_at: Utc::now(),
        };

        // LruCache handles eviction automatically on push
        let evicted = self.store.write().await.push(user_id.to_owned(), entry);
        if let Some((evicted_id, _)) = evicted.filter(|(id, _)| id != user_id) {
            debug!(user.id = %evicted_id, "Session evicted at capacity");
        }
    }

    async fn get(&self, user_id: &str) -> Option<SessionEntry> {
        // LruCache::get is mutable (updates access order for LRU)
        self.store.write().await.get(user_id).cloned()
    }

    async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}
