// ABOUTME: Main library entry point for the TDEE coach LINE bot
// ABOUTME: Wires profile parsing, metrics, sessions and LLM advice behind a LINE webhook
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # TDEE Coach
//!
//! A LINE chat bot that reads a one-line body profile such as
//! `男, 21歲, 175, 70, 中等`, replies with BMI, BMR and TDEE, and after the
//! user picks a goal (增肌 / 減脂 / 維持) relays diet and training advice
//! generated by an LLM.
//!
//! ## Architecture
//!
//! - **Core** (`tdee_coach_core`): error types, profile models and the parser
//! - **Intelligence** (`tdee_coach_intelligence`): BMI, BMR and TDEE formulas
//! - **Conversation**: per-message dispatcher over a session store and an
//!   advice generator
//! - **LINE**: webhook models, signature validation and the reply client
//! - **Routes**: axum router exposing `POST /callback` and `GET /health`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tdee_coach::advice::LlmAdviceGenerator;
//! use tdee_coach::conversation::ConversationHandler;
//! use tdee_coach::llm::ChatProvider;
//! use tdee_coach::session::InMemorySessionStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let provider = ChatProvider::from_env()?;
//!     let handler = ConversationHandler::new(
//!         Arc::new(InMemorySessionStore::default()),
//!         Arc::new(LlmAdviceGenerator::new(Arc::new(provider))),
//!     );
//!
//!     let reply = handler.handle_message("U1", "男, 21歲, 175, 70, 中等").await;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```

/// Advice generation capability and its LLM implementation
pub mod advice;

/// Environment-driven server configuration
pub mod config;

/// Chat replies, keywords and environment defaults
pub mod constants;

/// Per-message conversation dispatcher
pub mod conversation;

/// LINE Messaging API integration
pub mod line;

/// LLM provider abstraction (Gemini, OpenAI-compatible)
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Shared state for HTTP handlers
pub mod resources;

/// `HTTP` routes
pub mod routes;

/// Per-user session storage
pub mod session;

pub use tdee_coach_core::{errors, models, parser};
pub use tdee_coach_intelligence::{compute_metrics, ActivityFactors};
