// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Loads LINE credentials, HTTP port, LLM provider choice and session capacity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for the webhook server
//!
//! LLM credentials are not part of [`ServerConfig`]; each provider adapter
//! reads its own variables when [`crate::llm::ChatProvider::from_env`] runs.

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use anyhow::{Context, Result};
use tracing::info;

use super::types::LlmProviderType;
use crate::constants::env_config;

/// Environment variable holding the LINE channel access token
pub const LINE_CHANNEL_ACCESS_TOKEN_ENV: &str = "LINE_CHANNEL_ACCESS_TOKEN";

/// Environment variable holding the LINE channel secret
pub const LINE_CHANNEL_SECRET_ENV: &str = "LINE_CHANNEL_SECRET";

/// LINE Messaging API channel credentials
#[derive(Clone)]
pub struct LineChannelConfig {
    /// Bearer token for the reply API
    pub channel_access_token: String,
    /// Secret used to sign webhook bodies
    pub channel_secret: String,
}

impl Debug for LineChannelConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LineChannelConfig")
            .field("channel_access_token", &"[REDACTED]")
            .field("channel_secret", &"[REDACTED]")
            .finish()
    }
}

/// Main server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port for the webhook listener
    pub http_port: u16,
    /// LINE channel credentials
    pub line: LineChannelConfig,
    /// Which LLM backs the advice generator
    pub llm_provider: LlmProviderType,
    /// Maximum number of users kept in the session store
    pub session_store_capacity: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a required LINE credential is missing or empty.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_config::http_port(),
            line: LineChannelConfig {
                channel_access_token: required_env(LINE_CHANNEL_ACCESS_TOKEN_ENV)?,
                channel_secret: required_env(LINE_CHANNEL_SECRET_ENV)?,
            },
            llm_provider: LlmProviderType::from_env(),
            session_store_capacity: env_config::session_store_capacity(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the port is zero or the session capacity is zero.
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow::anyhow!("HTTP_PORT must be a non-zero port"));
        }
        if self.session_store_capacity == 0 {
            return Err(anyhow::anyhow!("SESSION_STORE_CAPACITY must be positive"));
        }
        Ok(())
    }

    /// One-line configuration summary without secrets
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "TDEE Coach configuration: http_port={}, llm_provider={}, session_store_capacity={}",
            self.http_port, self.llm_provider, self.session_store_capacity
        )
    }
}

/// Read a variable that must be present and non-empty
fn required_env(key: &str) -> Result<String> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .with_context(|| format!("{key} environment variable is required"))
}
