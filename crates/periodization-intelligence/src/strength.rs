// ABOUTME: Bodyweight-relative strength standards for the competition lifts
// ABOUTME: Classifies squat, bench, and deadlift performance from novice to elite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use periodization_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifts with published standards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiftType {
    /// Back squat
    Squat,
    /// Bench press
    Bench,
    /// Conventional deadlift
    Deadlift,
}

impl LiftType {
    /// Stable identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::Bench => "bench",
            Self::Deadlift => "deadlift",
        }
    }
}

impl FromStr for LiftType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "squat" => Ok(Self::Squat),
            "bench" | "bench_press" => Ok(Self::Bench),
            "deadlift" => Ok(Self::Deadlift),
            other => Err(AppError::invalid_input(format!(
                "Unknown lift: '{other}'. Valid options: squat, bench, deadlift"
            ))),
        }
    }
}

/// Strength tier, ordered weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLevel {
    /// Below every standard
    Novice,
    /// Meets the beginner standard
    Beginner,
    /// Meets the intermediate standard
    Intermediate,
    /// Meets the advanced standard
    Advanced,
    /// Meets the elite standard
    Elite,
}

impl StrengthLevel {
    /// Display label (pt-BR)
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Novice => "Novato",
            Self::Beginner => "Iniciante",
            Self::Intermediate => "Intermediário",
            Self::Advanced => "Avançado",
            Self::Elite => "Elite",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bodyweight multiples required per tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthStandards {
    /// Squat multiple
    pub squat: f64,
    /// Bench press multiple
    pub bench: f64,
    /// Deadlift multiple
    pub deadlift: f64,
}

impl StrengthStandards {
    /// Beginner tier
    pub const BEGINNER: Self = Self {
        squat: 1.0,
        bench: 0.75,
        deadlift: 1.25,
    };
    /// Intermediate tier
    pub const INTERMEDIATE: Self = Self {
        squat: 1.5,
        bench: 1.0,
        deadlift: 1.75,
    };
    /// Advanced tier
    pub const ADVANCED: Self = Self {
        squat: 2.0,
        bench: 1.5,
        deadlift: 2.25,
    };
    /// Elite tier
    pub const ELITE: Self = Self {
        squat: 2.5,
        bench: 1.75,
        deadlift: 2.75,
    };

    /// Standards for a tier; `Novice` has none
    #[must_use]
    pub const fn for_level(level: StrengthLevel) -> Option<Self> {
        match level {
            StrengthLevel::Novice => None,
            StrengthLevel::Beginner => Some(Self::BEGINNER),
            StrengthLevel::Intermediate => Some(Self::INTERMEDIATE),
            StrengthLevel::Advanced => Some(Self::ADVANCED),
            StrengthLevel::Elite => Some(Self::ELITE),
        }
    }

    /// Multiple required for `lift`
    #[must_use]
    pub const fn ratio_for(&self, lift: LiftType) -> f64 {
        match lift {
            LiftType::Squat => self.squat,
            LiftType::Bench => self.bench,
            LiftType::Deadlift => self.deadlift,
        }
    }
}

/// Tiers checked strongest first
const RANKED_TIERS: [StrengthLevel; 4] = [
    StrengthLevel::Elite,
    StrengthLevel::Advanced,
    StrengthLevel::Intermediate,
    StrengthLevel::Beginner,
];

/// Classify a lift by its bodyweight ratio; the highest qualifying tier wins
///
/// # Errors
///
/// Returns `InvalidInput` if the body weight is not positive or either weight is
/// not finite
pub fn classify_strength_level(
    lift: LiftType,
    lifted_weight: f64,
    body_weight: f64,
) -> AppResult<StrengthLevel> {
    if !body_weight.is_finite() || body_weight <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Body weight must be positive, got {body_weight}"
        )));
    }
    if !lifted_weight.is_finite() {
        return Err(AppError::invalid_input(format!(
            "Lifted weight must be finite, got {lifted_weight}"
        )));
    }

    let ratio = lifted_weight / body_weight;
    let level = RANKED_TIERS
        .into_iter()
        .find(|tier| {
            StrengthStandards::for_level(*tier)
                .is_some_and(|standards| ratio >= standards.ratio_for(lift))
        })
        .unwrap_or(StrengthLevel::Novice);

    Ok(level)
}
