// ABOUTME: Parser for the fixed-format profile message "男, 21歲, 175, 70, 中等"
// ABOUTME: Produces a fully validated UserProfile or a ParseFailure explaining why not
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile message parser
//!
//! The message is five comma-separated fields in fixed order:
//!
//! ```text
//! gender, age[歲], height_cm, weight_kg, activity
//! ```
//!
//! Both the ASCII comma and the full-width comma `，` separate fields.
//! Parsing is all-or-nothing: a profile is returned only when every field
//! is valid.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

use crate::models::{ActivityLevel, Gender, UserProfile};

/// Number of fields in a profile message
pub const PROFILE_FIELD_COUNT: usize = 5;

/// Localized "years" markers accepted after the age
const AGE_SUFFIXES: [&str; 2] = ["歲", "岁"];

/// Numeric profile field, used in failure reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    /// Age in years
    Age,
    /// Height in centimeters
    Height,
    /// Weight in kilograms
    Weight,
}

impl Display for ProfileField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Age => "age",
            Self::Height => "height",
            Self::Weight => "weight",
        })
    }
}

/// Why a message is not a profile
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// Wrong number of comma-separated fields
    #[error("expected {PROFILE_FIELD_COUNT} comma-separated fields, found {found}")]
    FieldCount {
        /// Number of fields actually present
        found: usize,
    },
    /// Gender token outside the known vocabulary
    #[error("unrecognized gender '{0}'")]
    UnrecognizedGender(String),
    /// A numeric field did not parse as a number
    #[error("{field} is not a number: '{value}'")]
    InvalidNumber {
        /// Offending field
        field: ProfileField,
        /// Raw text of the field
        value: String,
    },
    /// A numeric field parsed but is not a positive finite value
    #[error("{field} must be positive")]
    OutOfRange {
        /// Offending field
        field: ProfileField,
    },
}

/// Parse a chat message into a [`UserProfile`]
///
/// # Errors
///
/// Returns a [`ParseFailure`] when the field count is not five, the gender is
/// unknown, or age/height/weight are not positive numbers. Unknown activity
/// labels are accepted (see [`ActivityLevel::Unrecognized`]).
pub fn parse_profile(text: &str) -> Result<UserProfile, ParseFailure> {
    let normalized = text.replace('，', ",");
    let fields: Vec<&str> = normalized.split(',').map(str::trim).collect();

    let [gender, age, height, weight, activity] = fields.as_slice() else {
        return Err(ParseFailure::FieldCount {
            found: fields.len(),
        });
    };

    let gender = Gender::from_token(gender)
        .ok_or_else(|| ParseFailure::UnrecognizedGender((*gender).to_owned()))?;
    let age_years = parse_positive_integer(strip_age_suffix(age), ProfileField::Age)?;
    let height_cm = parse_positive_integer(height, ProfileField::Height)?;
    let weight_kg = parse_weight(weight)?;

    Ok(UserProfile::new(
        gender,
        age_years,
        height_cm,
        weight_kg,
        ActivityLevel::from_label(activity),
    ))
}

fn strip_age_suffix(raw: &str) -> &str {
    AGE_SUFFIXES
        .iter()
        .find_map(|suffix| raw.strip_suffix(suffix))
        .unwrap_or(raw)
        .trim()
}

fn parse_positive_integer(raw: &str, field: ProfileField) -> Result<u32, ParseFailure> {
    let value = i64::from_str(raw).map_err(|_| ParseFailure::InvalidNumber {
        field,
        value: raw.to_owned(),
    })?;
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or(ParseFailure::OutOfRange { field })
}

fn parse_weight(raw: &str) -> Result<f64, ParseFailure> {
    let value = f64::from_str(raw).map_err(|_| ParseFailure::InvalidNumber {
        field: ProfileField::Weight,
        value: raw.to_owned(),
    })?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ParseFailure::OutOfRange {
            field: ProfileField::Weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_suffix_is_optional() {
        let with_suffix = parse_profile("女, 30歲, 160, 55, 低").unwrap();
        let without_suffix = parse_profile("女, 30, 160, 55, 低").unwrap();
        assert_eq!(with_suffix, without_suffix);
        assert_eq!(with_suffix.age_years(), 30);
    }

    #[test]
    fn test_simplified_age_suffix() {
        let profile = parse_profile("男,25岁,180,80.5,重度").unwrap();
        assert_eq!(profile.age_years(), 25);
        assert!((profile.weight_kg() - 80.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extra_fields_rejected() {
        assert_eq!(
            parse_profile("男,21,175,70,中等,extra"),
            Err(ParseFailure::FieldCount { found: 6 })
        );
    }

    #[test]
    fn test_nan_weight_rejected() {
        assert_eq!(
            parse_profile("男,21,175,NaN,中等"),
            Err(ParseFailure::OutOfRange {
                field: ProfileField::Weight
            })
        );
    }
}
