// ABOUTME: User profile model with gender and activity level vocabularies
// ABOUTME: Profiles are immutable and only built by the profile parser
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Gender used to select the BMR formula branch
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male formula branch
    Male,
    /// Female formula branch
    Female,
}

impl Gender {
    /// Match a gender token from a chat message
    ///
    /// Accepts `男`/`女` and the ASCII words `male`/`female`/`m`/`f`
    /// (case-insensitive). Returns `None` for anything else.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "男" | "male" | "m" => Some(Self::Male),
            "女" | "female" | "f" => Some(Self::Female),
            _ => None,
        }
    }

    /// Localized label shown to users and sent to the LLM
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Activity level used to pick the TDEE multiplier
///
/// Labels from both chat vocabularies are recognised (`輕度/中等/重度` and
/// `低/中等/高`). Any other label is kept verbatim as `Unrecognized` so that
/// the calculator can apply its fallback factor instead of failing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise (`低`)
    Sedentary,
    /// Light exercise 1-3 days/week (`輕度`)
    LightlyActive,
    /// Moderate exercise 3-5 days/week (`中等`)
    ModeratelyActive,
    /// Hard exercise 6-7 days/week (`重度`)
    VeryActive,
    /// Very hard exercise or physical job (`高`)
    ExtraActive,
    /// Label outside the known vocabulary
    Unrecognized(String),
}

impl ActivityLevel {
    /// Map a free-text label onto an activity level
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "低" | "low" | "sedentary" => Self::Sedentary,
            "輕度" | "轻度" | "light" => Self::LightlyActive,
            "中等" | "moderate" | "medium" => Self::ModeratelyActive,
            "重度" | "heavy" | "active" => Self::VeryActive,
            "高" | "high" | "extra" => Self::ExtraActive,
            _ => Self::Unrecognized(label.trim().to_owned()),
        }
    }

    /// Localized label, or the raw label for unrecognized levels
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Sedentary => "低",
            Self::LightlyActive => "輕度",
            Self::ModeratelyActive => "中等",
            Self::VeryActive => "重度",
            Self::ExtraActive => "高",
            Self::Unrecognized(label) => label,
        }
    }

    /// Whether the label was part of the known vocabulary
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl Display for ActivityLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parsed user profile
///
/// Fields are private: a profile can only be obtained from
/// [`crate::parser::parse_profile`], which guarantees that age, height and
/// weight are positive.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserProfile {
    gender: Gender,
    age_years: u32,
    height_cm: u32,
    weight_kg: f64,
    activity_level: ActivityLevel,
}

impl UserProfile {
    pub(crate) const fn new(
        gender: Gender,
        age_years: u32,
        height_cm: u32,
        weight_kg: f64,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            gender,
            age_years,
            height_cm,
            weight_kg,
            activity_level,
        }
    }

    /// Gender of the user
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Age in years
    #[must_use]
    pub const fn age_years(&self) -> u32 {
        self.age_years
    }

    /// Height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> u32 {
        self.height_cm
    }

    /// Weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Declared activity level
    #[must_use]
    pub const fn activity_level(&self) -> &ActivityLevel {
        &self.activity_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_tokens() {
        assert_eq!(Gender::from_token("男"), Some(Gender::Male));
        assert_eq!(Gender::from_token("Female"), Some(Gender::Female));
        assert_eq!(Gender::from_token("M"), Some(Gender::Male));
        assert_eq!(Gender::from_token("其他"), None);
    }

    #[test]
    fn test_activity_labels_from_both_vocabularies() {
        assert_eq!(ActivityLevel::from_label("輕度"), ActivityLevel::LightlyActive);
        assert_eq!(ActivityLevel::from_label("重度"), ActivityLevel::VeryActive);
        assert_eq!(ActivityLevel::from_label("低"), ActivityLevel::Sedentary);
        assert_eq!(ActivityLevel::from_label("高"), ActivityLevel::ExtraActive);
        assert_eq!(ActivityLevel::from_label(" 中等 "), ActivityLevel::ModeratelyActive);
        assert_eq!(ActivityLevel::from_label("MODERATE"), ActivityLevel::ModeratelyActive);
    }

    #[test]
    fn test_unrecognized_activity_keeps_label() {
        let level = ActivityLevel::from_label("每天跑步");
        assert!(!level.is_recognized());
        assert_eq!(level.label(), "每天跑步");
    }
}
