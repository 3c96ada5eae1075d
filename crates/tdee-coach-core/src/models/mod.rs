// ABOUTME: Domain models for the profile -> metrics -> advice pipeline
// ABOUTME: Re-exports profile, metrics and goal types from their submodules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod goal;
mod metrics;
mod profile;

pub use goal::Goal;
pub use metrics::MetricsResult;
pub use profile::{ActivityLevel, Gender, UserProfile};
