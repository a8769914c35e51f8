// ABOUTME: Session-owned state of the program an athlete is following
// ABOUTME: Tracks week, phase, and mesocycle position plus empty workout/record containers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{MuscleGroup, PeriodizationProgram, ProgramSchedule};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;
use uuid::Uuid;

/// Rep prescription: a fixed count or a textual range such as `"8-10"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepTarget {
    /// Exact number of reps
    Count(u32),
    /// Range or free-form prescription
    Range(String),
}

/// One exercise prescription inside a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    /// Identifier
    pub id: String,
    /// Exercise library id
    pub exercise_id: String,
    /// Number of sets
    pub sets: u32,
    /// Reps per set
    pub reps: RepTarget,
    /// Load in kg
    pub weight: Option<f64>,
    /// Target RPE
    pub rpe: Option<f64>,
    /// Rest between sets in seconds
    pub rest_seconds: u32,
    /// Coaching notes
    pub notes: Option<String>,
}

/// A planned workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Day of the week (1-7)
    pub day: u8,
    /// Exercise prescriptions
    pub exercises: Vec<WorkoutSet>,
    /// Estimated duration in minutes
    pub estimated_duration_minutes: u32,
    /// Muscle groups emphasized
    pub focus: Vec<MuscleGroup>,
}

/// Best recorded performance for an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecord {
    /// Exercise library id
    pub exercise_id: String,
    /// Load lifted in kg
    pub weight: f64,
    /// Reps completed
    pub reps: u32,
    /// When the record was set
    pub date: DateTime<Utc>,
    /// Estimated one-rep max from this set
    pub estimated_max: f64,
}

/// Strength change for a single exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthGain {
    /// Load at program start
    pub initial: f64,
    /// Latest load
    pub current: f64,
    /// Relative improvement
    pub improvement: f64,
}

/// Aggregate progress counters; all zero or empty when a program starts
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressMetrics {
    /// Weekly volume history
    pub total_volume: Vec<f64>,
    /// Weekly average intensity history
    pub average_intensity: Vec<f64>,
    /// Workouts completed so far
    pub workouts_completed: u32,
    /// Workouts planned so far
    pub total_workouts: u32,
    /// Per-exercise strength change keyed by exercise id
    pub strength_gains: BTreeMap<String, StrengthGain>,
}

/// Outcome of moving a current program forward by one week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekAdvance {
    /// New 1-based week
    pub week: u32,
    /// Phase active after the move
    pub phase_id: String,
    /// Mesocycle counter after the move
    pub mesocycle: u32,
    /// Whether the move wrapped into a new mesocycle
    pub started_new_mesocycle: bool,
}

/// The program an athlete is currently following
///
/// Owned exclusively by the session that completed onboarding; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentProgram {
    /// Identifier
    pub id: Uuid,
    /// Owning profile
    pub user_id: Uuid,
    /// Catalog id of the followed program
    pub program_id: String,
    /// Current 1-based week
    pub current_week: u32,
    /// Id of a phase of the referenced program
    pub current_phase: String,
    /// Mesocycle counter, starting at 1
    pub current_mesocycle: u32,
    /// When the program started
    pub start_date: DateTime<Utc>,
    /// Planned workouts (empty at creation)
    pub workouts: Vec<Workout>,
    /// Personal records (empty at creation)
    pub personal_records: Vec<PersonalRecord>,
    /// Progress counters (zeroed at creation)
    pub progress_metrics: ProgressMetrics,
}

impl CurrentProgram {
    /// Seed a program at week 1, first phase, mesocycle 1
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the program has no phases
    pub fn new(
        user_id: Uuid,
        program: &PeriodizationProgram,
        start_date: DateTime<Utc>,
    ) -> AppResult<Self> {
        let first_phase = program.first_phase().ok_or_else(|| {
            AppError::internal(format!("Program '{}' has no phases", program.id))
        })?;

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            program_id: program.id.clone(),
            current_week: 1,
            current_phase: first_phase.id.clone(),
            current_mesocycle: 1,
            start_date,
            workouts: Vec::new(),
            personal_records: Vec::new(),
            progress_metrics: ProgressMetrics::default(),
        })
    }

    /// Share of the program elapsed, `current_week / duration * 100`
    #[must_use]
    pub fn progress_percentage(&self, program: &PeriodizationProgram) -> f64 {
        if program.duration_weeks == 0 {
            return 0.0;
        }
        f64::from(self.current_week) / f64::from(program.duration_weeks) * 100.0
    }

    /// Move forward one week
    ///
    /// Sequential programs follow their cumulative schedule into the next phase.
    /// Cyclical programs keep their anchor phase. After the final week both wrap
    /// to week 1 of the next mesocycle.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `program` is not the program being followed, and
    /// `InternalError` if the schedule has no phase for the new week
    pub fn advance_week(&mut self, program: &PeriodizationProgram) -> AppResult<WeekAdvance> {
        if program.id != self.program_id {
            return Err(AppError::invalid_input(format!(
                "Current program follows '{}', not '{}'",
                self.program_id, program.id
            )));
        }

        let next_week = self.current_week.saturating_add(1);
        let started_new_mesocycle = next_week > program.duration_weeks;
        let week = if started_new_mesocycle { 1 } else { next_week };

        let phase = match program.schedule {
            ProgramSchedule::Sequential { .. } => program.phase_for_week(week),
            ProgramSchedule::Cyclical { .. } => program
                .phase(&self.current_phase)
                .or_else(|| program.first_phase()),
        }
        .ok_or_else(|| {
            AppError::internal(format!(
                "Program '{}' has no phase for week {week}",
                program.id
            ))
        })?;

        self.current_week = week;
        self.current_phase.clone_from(&phase.id);
        if started_new_mesocycle {
            self.current_mesocycle = self.current_mesocycle.saturating_add(1);
        }

        info!(
            program_id = %self.program_id,
            week = self.current_week,
            phase = %self.current_phase,
            mesocycle = self.current_mesocycle,
            "Advanced current program"
        );

        Ok(WeekAdvance {
            week,
            phase_id: self.current_phase.clone(),
            mesocycle: self.current_mesocycle,
            started_new_mesocycle,
        })
    }
}
