// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Exercise library commands for periodization-cli
// ABOUTME: Lists reference exercises filtered by difficulty and muscle group

use crate::helpers::display::print_json;
use anyhow::Result;
use periodization_coach::catalog::ExerciseCatalog;
use periodization_coach::models::{Exercise, ExperienceLevel, MuscleGroup};

/// List exercises matching every given filter
pub fn list(difficulty: Option<ExperienceLevel>, muscle_group: Option<MuscleGroup>) -> Result<()> {
    let exercises: Vec<&Exercise> = ExerciseCatalog::global()
        .exercises()
        .iter()
        .filter(|e| difficulty.is_none_or(|d| e.difficulty == d))
        .filter(|e| muscle_group.is_none_or(|g| e.category == g))
        .collect();
    print_json(&exercises)
}
