// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Builds quiz answer sequences and fixed timestamps used across test files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test fixtures for `periodization_coach`

use chrono::{DateTime, TimeZone, Utc};
use periodization_coach::quiz::{QuestionId, QuizAnswer};

/// Deterministic creation time
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap()
}

/// Intermediate lifter, five days, practical periodization experience
pub fn intermediate_answers() -> Vec<QuizAnswer> {
    vec![
        QuizAnswer::new(QuestionId::Experience, "1-2 anos (Intermediário)"),
        QuizAnswer::new(QuestionId::Availability, "5 dias"),
        QuizAnswer::new(QuestionId::PeriodizationKnowledge, "Tenho experiência prática"),
    ]
}

/// `intermediate_answers` with the knowledge answer replaced
pub fn intermediate_answers_with_knowledge(knowledge: &str) -> Vec<QuizAnswer> {
    let mut answers = intermediate_answers();
    answers.pop();
    answers.push(QuizAnswer::new(QuestionId::PeriodizationKnowledge, knowledge));
    answers
}

/// Experience, availability, and knowledge answers only
pub fn evaluated_answers(experience: &str, availability: &str, knowledge: &str) -> Vec<QuizAnswer> {
    vec![
        QuizAnswer::new(QuestionId::Experience, experience),
        QuizAnswer::new(QuestionId::Availability, availability),
        QuizAnswer::new(QuestionId::PeriodizationKnowledge, knowledge),
    ]
}

/// Every question answered with a valid value
pub fn complete_answers() -> Vec<QuizAnswer> {
    vec![
        QuizAnswer::new(QuestionId::Name, "Marina"),
        QuizAnswer::new(QuestionId::Experience, "2-3 anos (Intermediário-Avançado)"),
        QuizAnswer::new(
            QuestionId::Goals,
            vec!["Aumentar força".to_owned(), "Ganhar massa muscular".to_owned()],
        ),
        QuizAnswer::new(QuestionId::Availability, "4 dias"),
        QuizAnswer::new(QuestionId::SessionDuration, "60-90 minutos"),
        QuizAnswer::new(
            QuestionId::Equipment,
            vec!["Barras e anilhas".to_owned(), "Halteres".to_owned()],
        ),
        QuizAnswer::new(QuestionId::TrainingSplit, "Superior/Inferior (Upper/Lower)"),
        QuizAnswer::new(QuestionId::InjuryHistory, "Nenhuma limitação"),
        QuizAnswer::new(QuestionId::PeriodizationKnowledge, "Conheço bem os conceitos"),
        QuizAnswer::new(QuestionId::Motivation, "Performance e força"),
        QuizAnswer::new(QuestionId::BodyWeight, 68.5),
    ]
}
