// ABOUTME: Training experience level shared by programs, exercises, and athlete profiles
// ABOUTME: Provides ordering, one-tier demotion, and string parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Experience level of an athlete (or the target audience of a program/exercise)
///
/// Levels are ordered: `Beginner < Intermediate < Advanced`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// Less than roughly a year of consistent training
    Beginner,
    /// One to three years of training
    Intermediate,
    /// More than three years of structured training
    Advanced,
}

impl ExperienceLevel {
    /// All levels in ascending order
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Drop one tier; beginner stays beginner
    #[must_use]
    pub const fn demoted(self) -> Self {
        match self {
            Self::Advanced => Self::Intermediate,
            Self::Intermediate | Self::Beginner => Self::Beginner,
        }
    }

    /// Stable identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(AppError::invalid_input(format!(
                "Unknown experience level: '{other}'. Valid options: beginner, intermediate, advanced"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demotion_drops_single_tier() {
        assert_eq!(ExperienceLevel::Advanced.demoted(), ExperienceLevel::Intermediate);
        assert_eq!(ExperienceLevel::Intermediate.demoted(), ExperienceLevel::Beginner);
        assert_eq!(ExperienceLevel::Beginner.demoted(), ExperienceLevel::Beginner);
    }

    #[test]
    fn test_parse_round_trips_display() {
        for level in ExperienceLevel::ALL {
            assert_eq!(level.to_string().parse::<ExperienceLevel>().ok(), Some(level));
        }
        assert!("elite".parse::<ExperienceLevel>().is_err());
    }
}
