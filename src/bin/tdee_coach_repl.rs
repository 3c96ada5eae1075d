// ABOUTME: Local console for the conversation handler, one stdin line per chat message
// ABOUTME: Uses the configured LLM provider but needs no LINE credentials
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # TDEE Coach REPL
//!
//! Type `開始`, then a profile such as `男, 21歲, 175, 70, 中等`, then a goal
//! number. Logs go to stderr so replies stay readable on stdout.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tdee_coach::{
    advice::LlmAdviceGenerator, constants::service_names, conversation::ConversationHandler,
    llm::ChatProvider, logging::LoggingConfig, session::InMemorySessionStore,
};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

#[derive(Parser)]
#[command(name = "tdee-coach-repl")]
#[command(about = "Chat with the TDEE coach from the terminal")]
pub struct Args {
    /// Conversation key used for the session store
    #[arg(long, default_value = "local-user")]
    user_id: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    LoggingConfig::from_env()
        .with_service_name(service_names::TDEE_COACH_REPL)
        .with_stderr()
        .init()?;

    let provider = ChatProvider::from_env().context("Failed to initialize LLM provider")?;
    let handler = ConversationHandler::new(
        Arc::new(InMemorySessionStore::default()),
        Arc::new(LlmAdviceGenerator::new(Arc::new(provider))),
    );

    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let reply = handler.handle_message(&args.user_id, &line).await;
        stdout.write_all(format!("{reply}\n\n").as_bytes()).await?;
        stdout.flush().await?;
    }

    Ok(())
}
