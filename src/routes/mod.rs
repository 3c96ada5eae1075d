// ABOUTME: HTTP route assembly for the webhook server
// ABOUTME: Merges health and webhook routes and applies tracing and body size layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Liveness and readiness probes
pub mod health;
/// LINE webhook callback
pub mod webhook;

pub use health::HealthRoutes;
pub use webhook::WebhookRoutes;

use std::sync::Arc;

use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::constants::line_api::MAX_WEBHOOK_BODY_BYTES;
use crate::resources::ServerResources;

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(WebhookRoutes::routes(resources))
        .layer(RequestBodyLimitLayer::new(MAX_WEBHOOK_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
