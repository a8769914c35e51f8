// ABOUTME: Tests for the recommendation orchestrator from answers to profile and program state
// ABOUTME: Covers seeded program state, profile defaults, enforcement, and catalog drift
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{complete_answers, fixed_now, intermediate_answers};
use periodization_coach::catalog::ProgramCatalog;
use periodization_coach::config::{CoachConfig, OnboardingDefaults};
use periodization_coach::errors::ErrorCode;
use periodization_coach::models::{ExperienceLevel, ProgramDraft};
use periodization_coach::quiz::{QuestionId, QuizAnswer};
use periodization_coach::recommendation::{evaluate, RecommendationEngine};

#[test]
fn test_intermediate_starts_undulating_at_first_phase() {
    let recommendation = evaluate(&intermediate_answers()).unwrap();
    let program = ProgramCatalog::global()
        .get_program_by_id("undulating-dup")
        .unwrap();
    let current = &recommendation.current_program;

    assert_eq!(current.program_id, "undulating-dup");
    assert_eq!(current.current_phase, program.phases[0].id);
    assert_eq!(current.current_phase, "dup-hypertrophy");
    assert_eq!(current.current_week, 1);
    assert_eq!(current.current_mesocycle, 1);
    assert_eq!(current.user_id, recommendation.profile.id);
    assert!(current.workouts.is_empty());
    assert!(current.personal_records.is_empty());
    assert_eq!(current.progress_metrics.workouts_completed, 0);
    assert!(current.progress_metrics.total_volume.is_empty());
}

#[test]
fn test_profile_defaults_for_sparse_answers() {
    let engine = RecommendationEngine::default();
    let recommendation = engine.evaluate_at(&intermediate_answers(), fixed_now()).unwrap();
    let profile = &recommendation.profile;

    assert_eq!(profile.name, "Usuário");
    assert_eq!(profile.level, ExperienceLevel::Intermediate);
    assert_eq!(profile.experience_months, 18);
    assert_eq!(profile.weekly_availability, 5);
    assert!(profile.goals.is_empty());
    assert!(profile.preferences.available_equipment.is_empty());
    assert_eq!(profile.preferences.preferred_split, "");
    assert_eq!(profile.preferences.minutes_per_session, 60);
    assert!((profile.body_weight_kg - 70.0).abs() < f64::EPSILON);
    assert_eq!(profile.created_at, fixed_now());
    assert_eq!(recommendation.current_program.start_date, fixed_now());
}

#[test]
fn test_profile_from_complete_answers() {
    let recommendation = evaluate(&complete_answers()).unwrap();
    let profile = &recommendation.profile;

    assert_eq!(profile.name, "Marina");
    assert_eq!(profile.goals, ["Aumentar força", "Ganhar massa muscular"]);
    assert_eq!(
        profile.preferences.available_equipment,
        ["Barras e anilhas", "Halteres"]
    );
    assert_eq!(
        profile.preferences.preferred_split,
        "Superior/Inferior (Upper/Lower)"
    );
    assert_eq!(profile.preferences.minutes_per_session, 75);
    assert!((profile.body_weight_kg - 68.5).abs() < f64::EPSILON);
    assert_eq!(recommendation.evaluation.recommended_program_id, "undulating-dup");
}

#[test]
fn test_blank_name_and_zero_weight_use_configured_defaults() {
    let defaults = OnboardingDefaults {
        display_name: "Atleta".into(),
        body_weight_kg: 80.0,
        session_minutes: 45,
    };
    let catalog = ProgramCatalog::seeded().unwrap();
    let engine = RecommendationEngine::new(&catalog, defaults);
    let answers = vec![
        QuizAnswer::new(QuestionId::Name, "   "),
        QuizAnswer::new(QuestionId::BodyWeight, 0.0),
        QuizAnswer::new(QuestionId::SessionDuration, "o dia todo"),
    ];

    let profile = engine.evaluate(&answers).unwrap().profile;
    assert_eq!(profile.name, "Atleta");
    assert!((profile.body_weight_kg - 80.0).abs() < f64::EPSILON);
    assert_eq!(profile.preferences.minutes_per_session, 45);
}

#[test]
fn test_session_duration_codes_map_to_minutes() {
    for (answer, minutes) in [
        ("30-45 minutos", 37),
        ("45-60-min", 52),
        ("60-90 minutos", 75),
        ("Mais de 90 minutos", 105),
    ] {
        let answers = vec![QuizAnswer::new(QuestionId::SessionDuration, answer)];
        let profile = evaluate(&answers).unwrap().profile;
        assert_eq!(profile.preferences.minutes_per_session, minutes, "{answer}");
    }
}

#[test]
fn test_enforced_required_answers() {
    let engine = RecommendationEngine::default().enforce_required_answers(true);

    let err = engine.evaluate(&intermediate_answers()).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert!(err.message.contains("name"));

    assert!(engine.evaluate(&complete_answers()).is_ok());
}

#[test]
fn test_from_config_carries_defaults_and_enforcement() {
    let mut config = CoachConfig::default();
    config.onboarding.display_name = "Convidado".into();

    let recommendation = RecommendationEngine::from_config(&config)
        .evaluate(&[])
        .unwrap();
    assert_eq!(recommendation.profile.name, "Convidado");

    config.enforce_required_answers = true;
    assert!(RecommendationEngine::from_config(&config).evaluate(&[]).is_err());
}

#[test]
fn test_catalog_drift_is_internal_error() {
    let no_drafts: Vec<ProgramDraft> = Vec::new();
    let empty = ProgramCatalog::from_drafts(no_drafts).unwrap();
    let engine = RecommendationEngine::new(&empty, OnboardingDefaults::default());

    let err = engine.evaluate(&intermediate_answers()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InternalError);
    assert!(err.message.contains("undulating-dup"));
}

#[test]
fn test_each_evaluation_creates_a_new_identity() {
    let first = evaluate(&intermediate_answers()).unwrap();
    let second = evaluate(&intermediate_answers()).unwrap();

    assert_ne!(first.profile.id, second.profile.id);
    assert_ne!(first.current_program.id, second.current_program.id);
}
