// ABOUTME: LINE webhook server binary serving POST /callback and GET /health
// ABOUTME: Loads configuration, builds the LLM provider and session store, then runs axum until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # TDEE Coach Server Binary
//!
//! Requires `LINE_CHANNEL_ACCESS_TOKEN`, `LINE_CHANNEL_SECRET` and the API
//! key of the selected LLM provider.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tdee_coach::{
    advice::LlmAdviceGenerator,
    config::environment::ServerConfig,
    conversation::ConversationHandler,
    line::{LineMessagingClient, LineSignatureValidator},
    llm::{ChatProvider, LlmProvider},
    logging::LoggingConfig,
    resources::ServerResources,
    routes::build_router,
    session::InMemorySessionStore,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "tdee-coach-server")]
#[command(about = "TDEE Coach - LINE webhook computing BMI/BMR/TDEE with LLM advice")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    LoggingConfig::from_env().init()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
        config.validate()?;
    }
    info!("{}", config.summary());

    let provider = ChatProvider::create_provider(config.llm_provider)
        .context("Failed to initialize LLM provider")?;
    info!(
        llm.provider = provider.name(),
        llm.model = provider.default_model(),
        "LLM provider ready"
    );

    let sessions = Arc::new(InMemorySessionStore::new(config.session_store_capacity));
    let advice = Arc::new(LlmAdviceGenerator::new(Arc::new(provider)));
    let conversation = ConversationHandler::new(sessions, advice);

    let reply_client = LineMessagingClient::new(config.line.channel_access_token.clone())
        .context("Failed to create LINE reply client")?;
    let signature_validator = LineSignatureValidator::new(&config.line.channel_secret);

    let resources = Arc::new(ServerResources::new(
        conversation,
        Arc::new(reply_client),
        signature_validator,
    ));
    let app = build_router(resources);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on http://{addr} (POST /callback, GET /health)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
