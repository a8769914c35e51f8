// ABOUTME: Periodization program and phase models with schedule validation
// ABOUTME: Distinguishes sequential phase blocks from cyclical weekly patterns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ExperienceLevel;
use crate::constants::loading::MAX_INTENSITY_PERCENT;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Periodization model of a program
///
/// - `Linear`: volume tapers while intensity rises across sequential phases
/// - `Undulating`: volume and intensity vary day to day within the same week
/// - `Block`: sequential focus blocks (accumulation, transmutation, realization)
/// - `Conjugate`: several qualities trained concurrently every week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodizationModel {
    /// Linear (traditional) periodization
    Linear,
    /// Daily undulating periodization
    Undulating,
    /// Block periodization
    Block,
    /// Conjugate method
    Conjugate,
}

impl PeriodizationModel {
    /// Whether the phases of this model repeat inside every week
    #[must_use]
    pub const fn is_cyclical(&self) -> bool {
        matches!(self, Self::Undulating | Self::Conjugate)
    }

    /// Stable identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Undulating => "undulating",
            Self::Block => "block",
            Self::Conjugate => "conjugate",
        }
    }
}

/// Volume-load class of a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeLoad {
    /// Low total volume
    Low,
    /// Moderate total volume
    Moderate,
    /// High total volume
    High,
}

/// Intensity band of a phase as a percentage of one-rep max
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityRange {
    /// Lower bound (% 1RM)
    pub min: f64,
    /// Upper bound (% 1RM)
    pub max: f64,
}

impl IntensityRange {
    /// Build a validated range
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` unless `0 <= min <= max <= 105`
    pub fn new(min: f64, max: f64) -> AppResult<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Check `0 <= min <= max <= 105`
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the bounds are reversed, negative, or supramaximal
    pub fn validate(&self) -> AppResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(AppError::invalid_input("Intensity bounds must be finite"));
        }
        if self.min < 0.0 || self.min > self.max || self.max > MAX_INTENSITY_PERCENT {
            return Err(AppError::value_out_of_range(format!(
                "Intensity range {:.0}-{:.0}% must satisfy 0 <= min <= max <= {MAX_INTENSITY_PERCENT:.0}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Whether a percentage falls inside the band (inclusive)
    #[must_use]
    pub fn contains(&self, percentage: f64) -> bool {
        (self.min..=self.max).contains(&percentage)
    }

    /// Center of the band
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// A phase of a periodization program
///
/// Immutable once defined in the catalog. How `duration_weeks` is read depends on
/// the owning program's [`ProgramSchedule`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    /// Unique id within the catalog
    pub id: String,
    /// Display name
    pub name: String,
    /// Length in weeks (sequential) or the cycle length it recurs within (cyclical)
    pub duration_weeks: u32,
    /// Free-text training focus
    pub focus: String,
    /// Volume-load class
    pub volume_load: VolumeLoad,
    /// Target intensity band
    pub intensity_range: IntensityRange,
    /// Representative rep targets, in presentation order
    pub rep_ranges: Vec<u32>,
    /// Descriptive characteristics (presentation only)
    pub characteristics: Vec<String>,
}

/// How the phases of a program consume calendar weeks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProgramSchedule {
    /// Phases run one after another; `cumulative_weeks[i]` is the last week of phase `i`
    Sequential {
        /// Running total of phase durations
        cumulative_weeks: Vec<u32>,
    },
    /// Every phase recurs inside each week for the whole cycle
    Cyclical {
        /// Length of the repeating cycle in weeks
        cycle_length_weeks: u32,
    },
}

/// Unvalidated program definition used to build a [`PeriodizationProgram`]
#[derive(Debug, Clone)]
pub struct ProgramDraft {
    /// Unique program id
    pub id: String,
    /// Display name
    pub name: String,
    /// Periodization model
    pub model: PeriodizationModel,
    /// Free-text description
    pub description: String,
    /// Total duration in weeks
    pub duration_weeks: u32,
    /// Ordered phases
    pub phases: Vec<Phase>,
    /// Levels this program suits
    pub recommended_for: Vec<ExperienceLevel>,
}

/// A periodization program with an explicit phase schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodizationProgram {
    /// Unique program id
    pub id: String,
    /// Display name
    pub name: String,
    /// Periodization model
    pub model: PeriodizationModel,
    /// Free-text description
    pub description: String,
    /// Total duration in weeks
    pub duration_weeks: u32,
    /// Ordered phases
    pub phases: Vec<Phase>,
    /// Levels this program suits
    pub recommended_for: Vec<ExperienceLevel>,
    /// How the phases map onto calendar weeks
    pub schedule: ProgramSchedule,
}

impl PeriodizationProgram {
    /// Validate a draft and derive its schedule from the model
    ///
    /// Sequential models (linear, block) require the phase durations to sum to the
    /// program duration. Cyclical models (undulating, conjugate) require every phase
    /// to span the full cycle, since each phase recurs every week.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for empty or duplicated phases, a zero duration, or a
    /// schedule mismatch, and `ValueOutOfRange` for invalid intensity bands
    pub fn new(draft: ProgramDraft) -> AppResult<Self> {
        if draft.duration_weeks == 0 {
            return Err(AppError::invalid_input(format!(
                "Program '{}' must last at least one week",
                draft.id
            )));
        }
        if draft.phases.is_empty() {
            return Err(AppError::invalid_input(format!(
                "Program '{}' has no phases",
                draft.id
            )));
        }

        let mut seen = HashSet::new();
        for phase in &draft.phases {
            if !seen.insert(phase.id.as_str()) {
                return Err(AppError::invalid_input(format!(
                    "Program '{}' repeats phase id '{}'",
                    draft.id, phase.id
                )));
            }
            if phase.duration_weeks == 0 {
                return Err(AppError::invalid_input(format!(
                    "Phase '{}' must last at least one week",
                    phase.id
                )));
            }
            phase.intensity_range.validate()?;
        }

        let schedule = if draft.model.is_cyclical() {
            if let Some(phase) = draft
                .phases
                .iter()
                .find(|phase| phase.duration_weeks != draft.duration_weeks)
            {
                return Err(AppError::invalid_input(format!(
                    "Cyclical phase '{}' spans {} weeks but the cycle is {} weeks",
                    phase.id, phase.duration_weeks, draft.duration_weeks
                )));
            }
            ProgramSchedule::Cyclical {
                cycle_length_weeks: draft.duration_weeks,
            }
        } else {
            let cumulative_weeks: Vec<u32> = draft
                .phases
                .iter()
                .scan(0_u32, |total, phase| {
                    *total += phase.duration_weeks;
                    Some(*total)
                })
                .collect();
            let total = cumulative_weeks.last().copied().unwrap_or_default();
            if total != draft.duration_weeks {
                return Err(AppError::invalid_input(format!(
                    "Sequential phases of '{}' sum to {total} weeks but the program lasts {} weeks",
                    draft.id, draft.duration_weeks
                )));
            }
            ProgramSchedule::Sequential { cumulative_weeks }
        };

        Ok(Self {
            id: draft.id,
            name: draft.name,
            model: draft.model,
            description: draft.description,
            duration_weeks: draft.duration_weeks,
            phases: draft.phases,
            recommended_for: draft.recommended_for,
            schedule,
        })
    }

    /// Whether the phases repeat inside each week
    #[must_use]
    pub const fn is_cyclical(&self) -> bool {
        matches!(self.schedule, ProgramSchedule::Cyclical { .. })
    }

    /// Whether the program is recommended for a level
    #[must_use]
    pub fn is_recommended_for(&self, level: ExperienceLevel) -> bool {
        self.recommended_for.contains(&level)
    }

    /// The phase a new athlete starts in
    #[must_use]
    pub fn first_phase(&self) -> Option<&Phase> {
        self.phases.first()
    }

    /// Look up a phase by id
    #[must_use]
    pub fn phase(&self, phase_id: &str) -> Option<&Phase> {
        self.phases.iter().find(|phase| phase.id == phase_id)
    }

    /// Position of a phase in the program order
    #[must_use]
    pub fn phase_index(&self, phase_id: &str) -> Option<usize> {
        self.phases.iter().position(|phase| phase.id == phase_id)
    }

    /// Phase active during a 1-based week
    ///
    /// For cyclical programs every phase is active each week, so the first phase
    /// anchors the week. Returns `None` for week 0 or weeks past the program end.
    #[must_use]
    pub fn phase_for_week(&self, week: u32) -> Option<&Phase> {
        if week == 0 || week > self.duration_weeks {
            return None;
        }
        match &self.schedule {
            ProgramSchedule::Sequential { cumulative_weeks } => cumulative_weeks
                .iter()
                .position(|last_week| week <= *last_week)
                .and_then(|index| self.phases.get(index)),
            ProgramSchedule::Cyclical { .. } => self.first_phase(),
        }
    }

    /// Phase for a given training session of a week
    ///
    /// Cyclical programs rotate through their weekly pattern by session index;
    /// sequential programs train the phase of that week in every session.
    #[must_use]
    pub fn phase_for_session(&self, week: u32, session_index: usize) -> Option<&Phase> {
        match &self.schedule {
            ProgramSchedule::Sequential { .. } => self.phase_for_week(week),
            ProgramSchedule::Cyclical { .. } => {
                if week == 0 || week > self.duration_weeks || self.phases.is_empty() {
                    return None;
                }
                self.phases.get(session_index % self.phases.len())
            }
        }
    }

    /// Inclusive `(first_week, last_week)` span of a sequential phase
    ///
    /// Returns `None` for cyclical programs, where phases do not own weeks.
    #[must_use]
    pub fn phase_week_span(&self, phase_id: &str) -> Option<(u32, u32)> {
        let ProgramSchedule::Sequential { cumulative_weeks } = &self.schedule else {
            return None;
        };
        let index = self.phase_index(phase_id)?;
        let last_week = *cumulative_weeks.get(index)?;
        let first_week = if index == 0 {
            1
        } else {
            cumulative_weeks.get(index - 1)? + 1
        };
        Some((first_week, last_week))
    }
}
