// ABOUTME: Integration tests for environment-driven configuration loading
// ABOUTME: Mutates process environment, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use serial_test::serial;
use tdee_coach::config::environment::{
    ServerConfig, LINE_CHANNEL_ACCESS_TOKEN_ENV, LINE_CHANNEL_SECRET_ENV,
};
use tdee_coach::config::LlmProviderType;
use tdee_coach::constants::env_config::{DEFAULT_HTTP_PORT, DEFAULT_SESSION_STORE_CAPACITY};
use tdee_coach::errors::ErrorCode;
use tdee_coach::llm::{ChatProvider, LlmProvider};

const MANAGED_VARS: &[&str] = &[
    LINE_CHANNEL_ACCESS_TOKEN_ENV,
    LINE_CHANNEL_SECRET_ENV,
    "HTTP_PORT",
    "PORT",
    "SESSION_STORE_CAPACITY",
    LlmProviderType::ENV_VAR,
    "OPENAI_API_KEY",
    "OPENAI_BASE_URL",
    "OPENAI_MODEL",
    "GEMINI_API_KEY",
    "GEMINI_MODEL",
];

fn clear_env() {
    for var in MANAGED_VARS {
        env::remove_var(var);
    }
}

fn set_line_credentials() {
    env::set_var(LINE_CHANNEL_ACCESS_TOKEN_ENV, "access-token");
    env::set_var(LINE_CHANNEL_SECRET_ENV, "channel-secret");
}

// ============================================================================
// Server Configuration
// ============================================================================

#[test]
#[serial]
fn test_defaults_with_line_credentials() {
    clear_env();
    set_line_credentials();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, DEFAULT_HTTP_PORT);
    assert_eq!(config.llm_provider, LlmProviderType::OpenAi);
    assert_eq!(config.session_store_capacity, DEFAULT_SESSION_STORE_CAPACITY);
    assert_eq!(config.line.channel_secret, "channel-secret");
    clear_env();
}

#[test]
#[serial]
fn test_missing_line_secret_is_an_error() {
    clear_env();
    env::set_var(LINE_CHANNEL_ACCESS_TOKEN_ENV, "access-token");

    let error = ServerConfig::from_env().unwrap_err();
    assert!(error.to_string().contains(LINE_CHANNEL_SECRET_ENV));
    clear_env();
}

#[test]
#[serial]
fn test_blank_access_token_is_an_error() {
    clear_env();
    set_line_credentials();
    env::set_var(LINE_CHANNEL_ACCESS_TOKEN_ENV, "   ");

    assert!(ServerConfig::from_env().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_port_and_capacity_overrides() {
    clear_env();
    set_line_credentials();
    env::set_var("PORT", "3000");
    env::set_var("SESSION_STORE_CAPACITY", "50");
    env::set_var(LlmProviderType::ENV_VAR, "gemini");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.session_store_capacity, 50);
    assert_eq!(config.llm_provider, LlmProviderType::Gemini);

    // HTTP_PORT wins over PORT
    env::set_var("HTTP_PORT", "9090");
    assert_eq!(ServerConfig::from_env().unwrap().http_port, 9090);
    clear_env();
}

#[test]
#[serial]
fn test_summary_hides_secrets() {
    clear_env();
    set_line_credentials();

    let config = ServerConfig::from_env().unwrap();
    let summary = config.summary();
    let debug = format!("{config:?}");

    assert!(!summary.contains("channel-secret"));
    assert!(!debug.contains("channel-secret"));
    assert!(!debug.contains("access-token"));
    clear_env();
}

// ============================================================================
// LLM Provider Selection
// ============================================================================

#[test]
#[serial]
fn test_openai_cloud_requires_api_key() {
    clear_env();

    let error = ChatProvider::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigMissing);
    clear_env();
}

#[test]
#[serial]
fn test_local_openai_compatible_endpoint_needs_no_key() {
    clear_env();
    env::set_var("OPENAI_BASE_URL", "http://localhost:11434/v1");
    env::set_var("OPENAI_MODEL", "qwen2.5:7b");

    let provider = ChatProvider::from_env().unwrap();
    assert_eq!(provider.provider_type(), LlmProviderType::OpenAi);
    assert_eq!(provider.default_model(), "qwen2.5:7b");
    clear_env();
}

#[test]
#[serial]
fn test_gemini_selection() {
    clear_env();
    env::set_var(LlmProviderType::ENV_VAR, "gemini");

    assert_eq!(
        ChatProvider::from_env().unwrap_err().code,
        ErrorCode::ConfigMissing
    );

    env::set_var("GEMINI_API_KEY", "gemini-key");
    let provider = ChatProvider::from_env().unwrap();
    assert_eq!(provider.provider_type(), LlmProviderType::Gemini);
    assert_eq!(provider.name(), "gemini");
    assert_eq!(provider.default_model(), "gemini-2.5-flash");
    clear_env();
}
