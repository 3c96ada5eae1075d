// ABOUTME: Core types for the TDEE Coach webhook: errors, domain models and profile parsing
// ABOUTME: Shared by the intelligence crate and the server crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # TDEE Coach Core
//!
//! Foundation types used across the workspace:
//!
//! - [`errors`]: `AppError`, `ErrorCode` and the HTTP error body
//! - [`models`]: `UserProfile`, `MetricsResult`, `Goal` and friends
//! - [`parser`]: turns the fixed-format profile message into a `UserProfile`

/// Unified error handling with standard error codes
pub mod errors;

/// Domain models for profiles, metrics and goals
pub mod models;

/// Fixed-format profile message parser
pub mod parser;
