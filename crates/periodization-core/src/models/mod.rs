// ABOUTME: Core data models for periodization programs, athletes, and program state
// ABOUTME: Re-exports level, program, profile, current-program, and exercise types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Domain types shared by the catalog, the calculators, the quiz evaluator, and
//! the recommendation orchestrator. Catalog types (`PeriodizationProgram`, `Phase`,
//! `Exercise`) are immutable reference data; `UserProfile` and `CurrentProgram`
//! are owned by the session that created them.

mod current_program;
mod exercise;
mod level;
mod profile;
mod program;

pub use current_program::{
    CurrentProgram, PersonalRecord, ProgressMetrics, RepTarget, StrengthGain, WeekAdvance,
    Workout, WorkoutSet,
};
pub use exercise::{Exercise, ExerciseType, MuscleGroup};
pub use level::ExperienceLevel;
pub use profile::{TrainingPreferences, UserProfile};
pub use program::{
    IntensityRange, PeriodizationModel, PeriodizationProgram, Phase, ProgramDraft,
    ProgramSchedule, VolumeLoad,
};
