// ABOUTME: Integration tests for BMI, BMR and TDEE calculations
// ABOUTME: Checks reference values, rounding, activity fallback and determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use tdee_coach::models::{ActivityLevel, Gender, MetricsResult};
use tdee_coach::parser::parse_profile;
use tdee_coach_intelligence::{
    calculate_bmi, calculate_bmr, calculate_tdee, compute_metrics, ActivityFactors,
};

#[test]
fn test_bmi_reference_value() {
    assert!((calculate_bmi(70.0, 175) - 22.86).abs() < f64::EPSILON);
    assert!((calculate_bmi(55.0, 160) - 21.48).abs() < f64::EPSILON);
}

#[test]
fn test_bmr_reference_values() {
    // 66 + 13.7*70 + 5*175 - 6.8*21 = 1757.2
    assert_eq!(calculate_bmr(Gender::Male, 70.0, 175, 21), 1757);
    // 655 + 9.6*55 + 1.8*160 - 4.7*30 = 1330.0
    assert_eq!(calculate_bmr(Gender::Female, 55.0, 160, 30), 1330);
}

#[test]
fn test_tdee_uses_activity_factor() {
    let factors = ActivityFactors::default();
    assert_eq!(
        calculate_tdee(1757, &ActivityLevel::ModeratelyActive, &factors),
        2723
    );
    assert_eq!(calculate_tdee(1757, &ActivityLevel::Sedentary, &factors), 2108);
    assert_eq!(calculate_tdee(1757, &ActivityLevel::ExtraActive, &factors), 3338);
}

#[test]
fn test_unknown_activity_matches_moderate() {
    let factors = ActivityFactors::default();
    let unknown = ActivityLevel::from_label("unknown-label");
    for bmr in [1200, 1330, 1757, 2100] {
        assert_eq!(
            calculate_tdee(bmr, &unknown, &factors),
            calculate_tdee(bmr, &ActivityLevel::ModeratelyActive, &factors)
        );
    }
}

#[test]
fn test_compute_metrics_for_parsed_profile() {
    let profile = parse_profile("男,21歲,175,70,中等").unwrap();
    let metrics = compute_metrics(&profile, &ActivityFactors::default());
    assert_eq!(
        metrics,
        MetricsResult {
            bmi: 22.86,
            bmr: 1757,
            tdee: 2723,
        }
    );

    let profile = parse_profile("女, 30歲, 160, 55, 低").unwrap();
    let metrics = compute_metrics(&profile, &ActivityFactors::default());
    assert_eq!(metrics.bmr, 1330);
    assert_eq!(metrics.tdee, 1596);
}

#[test]
fn test_custom_factor_table() {
    let factors = ActivityFactors {
        moderately_active: 1.5,
        ..ActivityFactors::default()
    };
    let profile = parse_profile("男,21,175,70,中等").unwrap();
    // 1757 * 1.5 = 2635.5, rounded half away from zero
    assert_eq!(compute_metrics(&profile, &factors).tdee, 2636);
}

#[test]
fn test_metrics_are_deterministic() {
    let profile = parse_profile("女,45,158,63.2,重度").unwrap();
    let factors = ActivityFactors::default();
    let first = compute_metrics(&profile, &factors);
    for _ in 0..10 {
        assert_eq!(compute_metrics(&profile, &factors), first);
    }
}
