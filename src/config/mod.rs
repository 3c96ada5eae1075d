// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-driven settings for the LINE channel, LLM provider and session store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: server configuration from environment variables
//! - **Types**: small enums shared by configuration consumers

/// Environment and server configuration
pub mod environment;
/// Shared configuration enums
pub mod types;

pub use environment::{LineChannelConfig, ServerConfig};
pub use types::LlmProviderType;
