// ABOUTME: Body metric calculations for the TDEE Coach: BMI, Harris-Benedict BMR and TDEE
// ABOUTME: Pure, deterministic functions over core domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # TDEE Coach Intelligence
//!
//! Metric formulas used to summarise a user profile before goal selection.
//! Every function here is total over validated profiles and performs no I/O.

/// Activity multiplier table
pub mod activity_factors;

/// BMI, BMR and TDEE formulas
pub mod calculator;

pub use activity_factors::ActivityFactors;
pub use calculator::{calculate_bmi, calculate_bmr, calculate_tdee, compute_metrics};
