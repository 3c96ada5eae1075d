// ABOUTME: Shared server state handed to every route through axum's State extractor
// ABOUTME: Bundles the conversation handler, reply client and webhook signature validator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use crate::conversation::ConversationHandler;
use crate::line::{LineReplyClient, LineSignatureValidator};

/// Dependencies shared by all request handlers
///
/// Built once at startup and wrapped in an `Arc`.
pub struct ServerResources {
    /// Turns inbound text into reply text
    pub conversation: ConversationHandler,
    /// Delivers replies to LINE
    pub reply_client: Arc<dyn LineReplyClient>,
    /// Checks the `x-line-signature` header against the channel secret
    pub signature_validator: LineSignatureValidator,
}

impl ServerResources {
    /// Assemble server resources
    #[must_use]
    pub const fn new(
        conversation: ConversationHandler,
        reply_client: Arc<dyn LineReplyClient>,
        signature_validator: LineSignatureValidator,
    ) -> Self {
        Self {
            conversation,
            reply_client,
            signature_validator,
        }
    }
}
