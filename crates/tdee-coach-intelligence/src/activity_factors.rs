// ABOUTME: Activity factor table mapping activity levels to TDEE multipliers
// ABOUTME: Defaults follow the standard 1.2 to 1.9 scale with a moderate fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tdee_coach_core::models::ActivityLevel;

/// Multipliers applied to BMR to estimate TDEE
///
/// Reference: `McArdle` et al. (2010), Exercise Physiology.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactors {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (physical job or training twice a day): 1.9
    pub extra_active: f64,
    /// Applied to labels outside the known vocabulary: 1.55
    pub fallback: f64,
}

impl ActivityFactors {
    /// Multiplier for the given activity level
    #[must_use]
    pub fn factor_for(&self, level: &ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtraActive => self.extra_active,
            ActivityLevel::Unrecognized(label) => {
                tracing::debug!(
                    activity.label = %label,
                    activity.factor = self.fallback,
                    "Unrecognized activity level, applying fallback factor"
                );
                self.fallback
            }
        }
    }
}

impl Default for ActivityFactors {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
            fallback: 1.55,
        }
    }
}
