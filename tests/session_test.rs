// ABOUTME: Tests for per-session application state and its mutation entry points
// ABOUTME: Covers onboarding completion, failure recording, views, theme, and week advancement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{fixed_now, intermediate_answers};
use periodization_coach::catalog::ProgramCatalog;
use periodization_coach::config::OnboardingDefaults;
use periodization_coach::errors::ErrorCode;
use periodization_coach::models::ExperienceLevel;
use periodization_coach::quiz::{QuestionId, QuizAnswer};
use periodization_coach::recommendation::RecommendationEngine;
use periodization_coach::session::{SessionState, View};

#[test]
fn test_new_session_awaits_onboarding() {
    let session = SessionState::new(fixed_now());

    assert!(session.is_onboarding());
    assert!(!session.is_dark_mode());
    assert_eq!(session.current_view(), View::Dashboard);
    assert!(session.user().is_none());
    assert!(session.current_program().is_none());
    assert_eq!(session.selected_date(), fixed_now());
    assert!(session.error().is_none());
}

#[test]
fn test_complete_onboarding_populates_session() {
    let catalog = ProgramCatalog::seeded().unwrap();
    let engine = RecommendationEngine::new(&catalog, OnboardingDefaults::default());
    let mut session = SessionState::new(fixed_now());
    session.update_view(View::Settings);
    session.set_error("stale");

    let evaluation = session
        .complete_onboarding(&engine, &intermediate_answers())
        .unwrap();

    assert_eq!(evaluation.level, ExperienceLevel::Intermediate);
    assert!(!session.is_onboarding());
    assert_eq!(session.current_view(), View::Dashboard);
    assert!(session.error().is_none());
    assert_eq!(session.user().unwrap().level, ExperienceLevel::Intermediate);
    assert_eq!(
        session.active_program(&catalog).unwrap().id,
        "undulating-dup"
    );
    assert_eq!(session.current_phase(&catalog).unwrap().id, "dup-hypertrophy");
}

#[test]
fn test_profile_is_created_once() {
    let catalog = ProgramCatalog::seeded().unwrap();
    let engine = RecommendationEngine::new(&catalog, OnboardingDefaults::default());
    let mut session = SessionState::new(fixed_now());
    session
        .complete_onboarding(&engine, &intermediate_answers())
        .unwrap();
    let profile = session.user().unwrap().clone();
    let program = session.current_program().unwrap().clone();

    let err = session
        .complete_onboarding(&engine, &[QuizAnswer::new(QuestionId::Name, "Bia")])
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(session.user(), Some(&profile));
    assert_eq!(session.current_program(), Some(&program));
    assert!(!session.is_onboarding());
}

#[test]
fn test_failed_onboarding_records_error() {
    let empty = ProgramCatalog::from_drafts(Vec::new()).unwrap();
    let engine = RecommendationEngine::new(&empty, OnboardingDefaults::default());
    let mut session = SessionState::new(fixed_now());

    let err = session
        .complete_onboarding(&engine, &intermediate_answers())
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InternalError);
    assert!(session.is_onboarding());
    assert!(session.user().is_none());
    assert!(session.error().is_some());

    session.clear_error();
    assert!(session.error().is_none());
}

#[test]
fn test_toggle_dark_mode() {
    let mut session = SessionState::new(fixed_now());
    assert!(session.toggle_dark_mode());
    assert!(!session.toggle_dark_mode());
}

#[test]
fn test_advance_week_requires_a_program() {
    let catalog = ProgramCatalog::seeded().unwrap();
    let mut session = SessionState::new(fixed_now());

    let err = session.advance_week(&catalog).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_advance_week_keeps_undulating_anchor_phase() {
    let catalog = ProgramCatalog::seeded().unwrap();
    let engine = RecommendationEngine::new(&catalog, OnboardingDefaults::default());
    let mut session = SessionState::new(fixed_now());
    session
        .complete_onboarding(&engine, &intermediate_answers())
        .unwrap();

    for expected_week in 2..=8 {
        let advance = session.advance_week(&catalog).unwrap();
        assert_eq!(advance.week, expected_week);
        assert_eq!(advance.phase_id, "dup-hypertrophy");
    }

    let wrapped = session.advance_week(&catalog).unwrap();
    assert!(wrapped.started_new_mesocycle);
    assert_eq!(wrapped.week, 1);
    assert_eq!(session.current_program().unwrap().current_mesocycle, 2);
}

#[test]
fn test_select_date_and_views() {
    let mut session = SessionState::new(fixed_now());
    let later = fixed_now() + chrono::Duration::days(3);

    session.select_date(later);
    session.update_view(View::Calculators);

    assert_eq!(session.selected_date(), later);
    assert_eq!(session.current_view(), View::Calculators);
    assert_eq!(View::Calculators.to_string(), "calculators");
}
