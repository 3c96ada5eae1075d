// ABOUTME: LINE webhook endpoint verifying signatures and answering text message events
// ABOUTME: Rejects unsigned or malformed deliveries with 400 and replies to each text event in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Webhook Routes
//!
//! `POST /callback` is the only route LINE calls. The raw body is
//! verified against `x-line-signature` before it is parsed, so the handler
//! extracts `Bytes` rather than `Json`.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use tracing::{debug, info, instrument, warn};

use crate::constants::line_api::SIGNATURE_HEADER;
use crate::line::{SignatureValidation, WebhookPayload};
use crate::resources::ServerResources;
use tdee_coach_core::errors::{AppError, ErrorCode};

/// Webhook routes implementation
pub struct WebhookRoutes;

impl WebhookRoutes {
    /// Create the webhook route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/callback", post(Self::handle_callback))
            .with_state(resources)
    }

    #[instrument(skip_all, fields(body.bytes = body.len()))]
    async fn handle_callback(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Result<(StatusCode, &'static str), AppError> {
        let signature = headers
            .get(SIGNATURE_HEADER)
            .and_then(|value| value.to_str().ok());

        match resources.signature_validator.validate(signature, &body) {
            SignatureValidation::Valid => {}
            SignatureValidation::Missing => {
                return Err(AppError::invalid_signature(format!(
                    "Missing {SIGNATURE_HEADER} header"
                )));
            }
            SignatureValidation::Invalid => {
                return Err(AppError::invalid_signature(
                    "Signature does not match request body",
                ));
            }
        }

        let payload: WebhookPayload = serde_json::from_slice(&body).map_err(|e| {
            AppError::new(ErrorCode::InvalidFormat, format!("Malformed webhook body: {e}"))
        })?;

        info!(events = payload.events.len(), "Webhook delivery accepted");
        Self::dispatch_events(&resources, &payload).await;

        Ok((StatusCode::OK, "OK"))
    }

    /// Answer text message events one at a time, in delivery order
    async fn dispatch_events(resources: &ServerResources, payload: &WebhookPayload) {
        for event in &payload.events {
            let Some(message) = event.as_text_message() else {
                debug!(event.kind = %event.event_type, "Ignoring non-text event");
                continue;
            };

            let reply = resources
                .conversation
                .handle_message(message.user_id, message.text)
                .await;

            if let Err(e) = resources
                .reply_client
                .reply_text(message.reply_token, &reply)
                .await
            {
                warn!(user.id = %message.user_id, error = %e, "Failed to deliver reply");
            }
        }
    }
}
