// ABOUTME: BMI, Harris-Benedict BMR and TDEE formulas with fixed rounding rules
// ABOUTME: compute_metrics derives the full MetricsResult for a parsed profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metric formulas
//!
//! # References
//!
//! - Harris, J.A., & Benedict, F.G. (1918). A biometric study of human basal
//!   metabolism. *PNAS*, 4(12), 370-373.
//!   <https://doi.org/10.1073/pnas.4.12.370>
//!
//! Rounding is half away from zero (`f64::round`) throughout.

use tdee_coach_core::models::{ActivityLevel, Gender, MetricsResult, UserProfile};

use crate::activity_factors::ActivityFactors;

/// Body Mass Index in kg/m², rounded to two decimals
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)²
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: u32) -> f64 {
    let height_m = f64::from(height_cm) / 100.0;
    round2(weight_kg / (height_m * height_m))
}

/// Basal Metabolic Rate using the original Harris-Benedict equation
///
/// - Men: 66 + 13.7 x `weight_kg` + 5 x `height_cm` - 6.8 x age
/// - Women: 655 + 9.6 x `weight_kg` + 1.8 x `height_cm` - 4.7 x age
#[must_use]
pub fn calculate_bmr(gender: Gender, weight_kg: f64, height_cm: u32, age_years: u32) -> i32 {
    let height = f64::from(height_cm);
    let age = f64::from(age_years);
    let bmr = match gender {
        Gender::Male => 66.0 + 13.7 * weight_kg + 5.0 * height - 6.8 * age,
        Gender::Female => 655.0 + 9.6 * weight_kg + 1.8 * height - 4.7 * age,
    };
    bmr.round() as i32
}

/// Total Daily Energy Expenditure: BMR x activity factor
#[must_use]
pub fn calculate_tdee(bmr: i32, activity_level: &ActivityLevel, factors: &ActivityFactors) -> i32 {
    (f64::from(bmr) * factors.factor_for(activity_level)).round() as i32
}

/// Derive BMI, BMR and TDEE for a profile
#[must_use]
pub fn compute_metrics(profile: &UserProfile, factors: &ActivityFactors) -> MetricsResult {
    let bmi = calculate_bmi(profile.weight_kg(), profile.height_cm());
    let bmr = calculate_bmr(
        profile.gender(),
        profile.weight_kg(),
        profile.height_cm(),
        profile.age_years(),
    );
    let tdee = calculate_tdee(bmr, profile.activity_level(), factors);
    MetricsResult { bmi, bmr, tdee }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_half_away_from_zero() {
        assert!((round2(1.005_000_1) - 1.01).abs() < 1e-9);
        assert!((round2(22.857_142) - 22.86).abs() < 1e-9);
    }

    #[test]
    fn test_female_branch_differs_from_male() {
        let male = calculate_bmr(Gender::Male, 60.0, 165, 25);
        let female = calculate_bmr(Gender::Female, 60.0, 165, 25);
        assert_ne!(male, female);
    }
}
