// ABOUTME: Goal selection offered after a profile summary
// ABOUTME: Maps menu numbers and keywords to muscle gain, fat loss or maintenance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// User-selected objective that shapes the advice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Muscle gain (`1` / `增肌`)
    MuscleGain,
    /// Fat loss (`2` / `減脂`)
    FatLoss,
    /// Maintenance (`3` / `維持`)
    Maintenance,
}

impl Goal {
    /// Every goal in menu order
    pub const ALL: [Self; 3] = [Self::MuscleGain, Self::FatLoss, Self::Maintenance];

    /// Recognise a goal reply
    ///
    /// The whole (trimmed) message must be the menu number or a keyword;
    /// goals mentioned inside longer sentences are not picked up.
    #[must_use]
    pub fn from_keyword(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "1" | "增肌" | "bulk" | "muscle" => Some(Self::MuscleGain),
            "2" | "減脂" | "减脂" | "cut" | "fat loss" => Some(Self::FatLoss),
            "3" | "維持" | "维持" | "maintain" | "maintenance" => Some(Self::Maintenance),
            _ => None,
        }
    }

    /// Localized label, also used verbatim in the advice prompt
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MuscleGain => "增肌",
            Self::FatLoss => "減脂",
            Self::Maintenance => "維持",
        }
    }

    /// Position in the goal menu
    #[must_use]
    pub const fn menu_number(&self) -> u8 {
        match self {
            Self::MuscleGain => 1,
            Self::FatLoss => 2,
            Self::Maintenance => 3,
        }
    }
}

impl Display for Goal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
