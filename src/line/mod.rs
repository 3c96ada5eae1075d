// ABOUTME: LINE Messaging API integration: webhook models, signature validation and reply client
// ABOUTME: Only text message events are acted upon; other event kinds are acknowledged and ignored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! LINE Messaging API integration
//!
//! ## Security
//!
//! Every webhook request carries an `X-Line-Signature` header holding the
//! base64 HMAC-SHA256 of the raw body keyed by the channel secret. Bodies are
//! verified before they are parsed.

/// Webhook payload models
pub mod models;
/// Reply API client
pub mod reply;
/// Webhook signature validation
pub mod signature;

pub use models::{EventMessage, EventSource, TextMessageEvent, WebhookEvent, WebhookPayload};
pub use reply::{truncate_for_line, LineMessagingClient, LineReplyClient, MAX_TEXT_MESSAGE_CHARS};
pub use signature::{LineSignatureValidator, SignatureValidation};
