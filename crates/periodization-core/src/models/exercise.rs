// ABOUTME: Exercise reference models for the exercise library
// ABOUTME: Muscle groups, compound/isolation classification, and exercise metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ExperienceLevel;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Primary muscle group trained by an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats, traps, and spinal erectors
    Back,
    /// Deltoids
    Shoulders,
    /// Biceps and triceps
    Arms,
    /// Quadriceps, hamstrings, and calves
    Legs,
    /// Abdominals and obliques
    Core,
    /// Gluteals
    Glutes,
}

impl MuscleGroup {
    /// Stable identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Arms => "arms",
            Self::Legs => "legs",
            Self::Core => "core",
            Self::Glutes => "glutes",
        }
    }
}

impl FromStr for MuscleGroup {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chest" => Ok(Self::Chest),
            "back" => Ok(Self::Back),
            "shoulders" => Ok(Self::Shoulders),
            "arms" => Ok(Self::Arms),
            "legs" => Ok(Self::Legs),
            "core" => Ok(Self::Core),
            "glutes" => Ok(Self::Glutes),
            other => Err(AppError::invalid_input(format!(
                "Unknown muscle group: '{other}'. Valid options: chest, back, shoulders, arms, legs, core, glutes"
            ))),
        }
    }
}

/// Whether an exercise works several joints or one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    /// Multi-joint movement
    Compound,
    /// Single-joint movement
    Isolation,
}

/// Exercise library entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique id
    pub id: String,
    /// Display name
    pub name: String,
    /// Primary muscle group
    pub category: MuscleGroup,
    /// Compound or isolation
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    /// Equipment tags
    pub equipment: Vec<String>,
    /// Minimum experience level suggested
    pub difficulty: ExperienceLevel,
    /// Step-by-step execution cues
    pub instructions: Vec<String>,
    /// Optional demonstration video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}
