// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Chat replies, keywords, service names and environment defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain: user-facing chat text lives in
//! [`messages`], everything the server reads from the environment in
//! [`env_config`].

use std::env;

/// User-facing chat replies
pub mod messages;

/// Service identity used in logs
pub mod service_names {
    /// Name reported by the webhook server at startup
    pub const TDEE_COACH_SERVER: &str = "tdee-coach-server";
    /// Name reported by the local REPL
    pub const TDEE_COACH_REPL: &str = "tdee-coach-repl";
}

/// Conversation keywords
pub mod keywords {
    /// Phrases that restart the conversation; matched anywhere in the message
    pub const START_KEYWORDS: &[&str] = &["開始", "开始"];

    /// ASCII start keyword, matched case-insensitively as a standalone word
    pub const START_KEYWORD_ASCII: &str = "start";
}

/// LINE Messaging API endpoints and headers
pub mod line_api {
    /// Reply endpoint used to answer a webhook event
    pub const REPLY_URL: &str = "https://api.line.me/v2/bot/message/reply";

    /// Header carrying the webhook body signature
    pub const SIGNATURE_HEADER: &str = "x-line-signature";

    /// Upper bound on accepted webhook bodies
    pub const MAX_WEBHOOK_BODY_BYTES: usize = 1024 * 1024;
}

/// Environment-based configuration
pub mod env_config {
    use super::env;

    /// Default HTTP port when neither `HTTP_PORT` nor `PORT` is set
    pub const DEFAULT_HTTP_PORT: u16 = 8080;

    /// Default number of users kept in the session store
    pub const DEFAULT_SESSION_STORE_CAPACITY: usize = 10_000;

    /// Get HTTP server port from environment or default
    ///
    /// `PORT` is honoured as a fallback for hosting platforms that inject it.
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .or_else(|_| env::var("PORT"))
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_HTTP_PORT)
    }

    /// Get the session store capacity from environment or default
    #[must_use]
    pub fn session_store_capacity() -> usize {
        env::var("SESSION_STORE_CAPACITY")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|capacity| *capacity > 0)
            .unwrap_or(DEFAULT_SESSION_STORE_CAPACITY)
    }
}
