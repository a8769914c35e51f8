// ABOUTME: Tests for current-program seeding, progress, and week advancement
// ABOUTME: Covers sequential phase transitions and cyclical mesocycle wrap-around
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Utc;
use periodization_core::models::{
    CurrentProgram, ExperienceLevel, IntensityRange, PeriodizationModel, PeriodizationProgram,
    Phase, ProgramDraft, VolumeLoad,
};
use uuid::Uuid;

fn phase(id: &str, weeks: u32) -> Phase {
    Phase {
        id: id.to_owned(),
        name: id.to_owned(),
        duration_weeks: weeks,
        focus: "focus".to_owned(),
        volume_load: VolumeLoad::High,
        intensity_range: IntensityRange::new(65.0, 75.0).unwrap(),
        rep_ranges: vec![8, 10, 12],
        characteristics: vec!["volume".to_owned()],
    }
}

fn linear() -> PeriodizationProgram {
    PeriodizationProgram::new(ProgramDraft {
        id: "linear".to_owned(),
        name: "Linear".to_owned(),
        model: PeriodizationModel::Linear,
        description: String::new(),
        duration_weeks: 3,
        phases: vec![phase("base", 2), phase("peak", 1)],
        recommended_for: vec![ExperienceLevel::Beginner],
    })
    .unwrap()
}

fn undulating() -> PeriodizationProgram {
    PeriodizationProgram::new(ProgramDraft {
        id: "dup".to_owned(),
        name: "DUP".to_owned(),
        model: PeriodizationModel::Undulating,
        description: String::new(),
        duration_weeks: 2,
        phases: vec![phase("hyp", 2), phase("str", 2)],
        recommended_for: vec![ExperienceLevel::Intermediate],
    })
    .unwrap()
}

#[test]
fn test_new_program_starts_zeroed() {
    let program = linear();
    let user_id = Uuid::new_v4();
    let current = CurrentProgram::new(user_id, &program, Utc::now()).unwrap();

    assert_eq!(current.user_id, user_id);
    assert_eq!(current.program_id, "linear");
    assert_eq!(current.current_week, 1);
    assert_eq!(current.current_phase, "base");
    assert_eq!(current.current_mesocycle, 1);
    assert!(current.workouts.is_empty());
    assert!(current.personal_records.is_empty());
    assert_eq!(current.progress_metrics.workouts_completed, 0);
    assert_eq!(current.progress_metrics.total_workouts, 0);
    assert!(current.progress_metrics.total_volume.is_empty());
    assert!(current.progress_metrics.strength_gains.is_empty());
}

#[test]
fn test_sequential_advance_moves_through_phases() {
    let program = linear();
    let mut current = CurrentProgram::new(Uuid::new_v4(), &program, Utc::now()).unwrap();

    let step = current.advance_week(&program).unwrap();
    assert_eq!(step.week, 2);
    assert_eq!(step.phase_id, "base");
    assert!(!step.started_new_mesocycle);

    let step = current.advance_week(&program).unwrap();
    assert_eq!(step.week, 3);
    assert_eq!(step.phase_id, "peak");

    let step = current.advance_week(&program).unwrap();
    assert_eq!(step.week, 1);
    assert_eq!(step.phase_id, "base");
    assert_eq!(step.mesocycle, 2);
    assert!(step.started_new_mesocycle);
}

#[test]
fn test_cyclical_advance_keeps_phase_and_wraps() {
    let program = undulating();
    let mut current = CurrentProgram::new(Uuid::new_v4(), &program, Utc::now()).unwrap();

    let step = current.advance_week(&program).unwrap();
    assert_eq!((step.week, step.phase_id.as_str()), (2, "hyp"));

    let step = current.advance_week(&program).unwrap();
    assert_eq!((step.week, step.mesocycle), (1, 2));
    assert_eq!(current.current_phase, "hyp");
}

#[test]
fn test_advance_with_other_program_rejected() {
    let mut current = CurrentProgram::new(Uuid::new_v4(), &linear(), Utc::now()).unwrap();
    assert!(current.advance_week(&undulating()).is_err());
    assert_eq!(current.current_week, 1);
}

#[test]
fn test_progress_percentage() {
    let program = linear();
    let mut current = CurrentProgram::new(Uuid::new_v4(), &program, Utc::now()).unwrap();
    assert!((current.progress_percentage(&program) - 100.0 / 3.0).abs() < 1e-9);
    current.advance_week(&program).unwrap();
    current.advance_week(&program).unwrap();
    assert!((current.progress_percentage(&program) - 100.0).abs() < 1e-9);
}

#[test]
fn test_advance_from_max_week_wraps_without_overflow() {
    let program = linear();
    let mut current = CurrentProgram::new(Uuid::new_v4(), &program, Utc::now()).unwrap();
    current.current_week = u32::MAX;

    let advance = current.advance_week(&program).unwrap();

    assert!(advance.started_new_mesocycle);
    assert_eq!(advance.week, 1);
    assert_eq!(advance.phase_id, "base");
    assert_eq!(current.current_mesocycle, 2);
}
