// ABOUTME: Onboarding questionnaire, answer handling, and quiz evaluation
// ABOUTME: Exposes the question table, answer codes, the step flow, and the evaluator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Onboarding Quiz
//!
//! Eleven fixed questions feed a pure evaluator that derives the athlete's
//! experience level and a recommended program. Evaluated questions resolve
//! through enumerated [`codes`] rather than raw label text.

/// Quiz answer values and answer sets
pub mod answers;
/// Enumerated answer codes for evaluated questions
pub mod codes;
/// Level and program derivation
pub mod evaluator;
/// Question-by-question onboarding flow
pub mod flow;
/// Fixed questionnaire definition
pub mod questions;

pub use answers::{load_answers_file, AnswerSet, AnswerValue, QuizAnswer};
pub use codes::{
    AnswerCode, ExperienceBand, PeriodizationKnowledge, SessionDuration, WeeklyAvailability,
};
pub use evaluator::{evaluate_quiz, recommend_program, QuizEvaluation};
pub use flow::{missing_required, FlowStep, OnboardingFlow};
pub use questions::{question, questions, QuestionId, QuestionKind, QuestionOption, QuizQuestion};
