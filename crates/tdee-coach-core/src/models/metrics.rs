// ABOUTME: Derived body metrics (BMI, BMR, TDEE) for a parsed profile
// ABOUTME: Plain value type produced by the metrics calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Metrics computed from a [`super::UserProfile`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MetricsResult {
    /// Body Mass Index in kg/m², rounded to 2 decimal places
    pub bmi: f64,
    /// Basal Metabolic Rate in kcal/day
    pub bmr: i32,
    /// Total Daily Energy Expenditure in kcal/day
    pub tdee: i32,
}
