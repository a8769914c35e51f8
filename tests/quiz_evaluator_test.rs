// ABOUTME: Tests for quiz evaluation into level, program, and training metrics
// ABOUTME: Covers demotion, availability routing, code and label resolution, and fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{evaluated_answers, intermediate_answers, intermediate_answers_with_knowledge};
use periodization_coach::catalog::ProgramCatalog;
use periodization_coach::models::ExperienceLevel;
use periodization_coach::quiz::{
    evaluate_quiz, recommend_program, AnswerSet, QuestionId, QuizAnswer, WeeklyAvailability,
};

fn evaluate(answers: Vec<QuizAnswer>) -> periodization_coach::QuizEvaluation {
    evaluate_quiz(&AnswerSet::from_answers(answers))
}

#[test]
fn test_intermediate_five_days_gets_undulating() {
    let evaluation = evaluate(intermediate_answers());

    assert_eq!(evaluation.level, ExperienceLevel::Intermediate);
    assert_eq!(evaluation.recommended_program_id, "undulating-dup");
    assert_eq!(evaluation.experience_months, 18);
    assert_eq!(evaluation.weekly_availability, 5);
}

#[test]
fn test_never_heard_demotes_to_beginner_linear() {
    let evaluation = evaluate(intermediate_answers_with_knowledge("Nunca ouvi falar"));

    assert_eq!(evaluation.level, ExperienceLevel::Beginner);
    assert_eq!(evaluation.recommended_program_id, "linear-basic");
    assert_eq!(evaluation.experience_months, 18);
}

#[test]
fn test_superficial_knowledge_demotes_advanced_one_tier() {
    let evaluation = evaluate(evaluated_answers(
        "Mais de 3 anos (Avançado)",
        "6+ dias",
        "Conheço superficialmente",
    ));

    assert_eq!(evaluation.level, ExperienceLevel::Intermediate);
    assert_eq!(evaluation.recommended_program_id, "linear-basic");
    assert_eq!(evaluation.experience_months, 48);
    assert_eq!(evaluation.weekly_availability, 6);
}

#[test]
fn test_advanced_routing_by_availability() {
    let cases = [
        ("6+ dias", "conjugate-westside"),
        ("5 dias", "block-conjugate"),
        ("4 dias", "block-conjugate"),
        ("2-3 dias", "undulating-dup"),
    ];
    for (availability, expected) in cases {
        let evaluation = evaluate(evaluated_answers(
            "Mais de 3 anos (Avançado)",
            availability,
            "Tenho experiência prática",
        ));
        assert_eq!(evaluation.level, ExperienceLevel::Advanced);
        assert_eq!(evaluation.recommended_program_id, expected, "{availability}");
    }
}

#[test]
fn test_intermediate_outside_four_or_five_days_gets_linear() {
    for availability in ["2-3 dias", "6+ dias"] {
        let evaluation = evaluate(evaluated_answers(
            "2-3 anos (Intermediário-Avançado)",
            availability,
            "Tenho conhecimento básico",
        ));
        assert_eq!(evaluation.recommended_program_id, "linear-basic", "{availability}");
    }
}

#[test]
fn test_first_year_bands_are_beginner() {
    for (experience, months) in [
        ("Menos de 6 meses (Iniciante)", 3),
        ("6 meses a 1 ano (Iniciante-Intermediário)", 9),
    ] {
        let evaluation = evaluate(evaluated_answers(
            experience,
            "6+ dias",
            "Tenho experiência prática",
        ));
        assert_eq!(evaluation.level, ExperienceLevel::Beginner);
        assert_eq!(evaluation.recommended_program_id, "linear-basic");
        assert_eq!(evaluation.experience_months, months);
    }
}

#[test]
fn test_stable_codes_resolve_like_labels() {
    let by_code = evaluate(evaluated_answers("1-to-2-years", "5-days", "practical"));
    let by_label = evaluate(intermediate_answers());
    assert_eq!(by_code, by_label);
}

#[test]
fn test_empty_answers_fall_back() {
    let evaluation = evaluate_quiz(&AnswerSet::new());

    assert_eq!(evaluation.level, ExperienceLevel::Beginner);
    assert_eq!(evaluation.recommended_program_id, "linear-basic");
    assert_eq!(evaluation.experience_months, 6);
    assert_eq!(evaluation.weekly_availability, 3);
}

#[test]
fn test_unrecognized_answers_fall_back_without_error() {
    let evaluation = evaluate(vec![
        QuizAnswer::new(QuestionId::Experience, "uma década"),
        QuizAnswer::new(QuestionId::Availability, "todo dia"),
        QuizAnswer::new(QuestionId::PeriodizationKnowledge, 3.0),
    ]);

    assert_eq!(evaluation.level, ExperienceLevel::Beginner);
    assert_eq!(evaluation.experience_months, 6);
    assert_eq!(evaluation.weekly_availability, 3);
}

#[test]
fn test_later_answer_wins() {
    let mut answers = intermediate_answers();
    answers.push(QuizAnswer::new(QuestionId::Availability, "2-3 dias"));

    let evaluation = evaluate(answers);
    assert_eq!(evaluation.weekly_availability, 3);
    assert_eq!(evaluation.recommended_program_id, "linear-basic");
}

#[test]
fn test_every_recommendation_exists_in_catalog() {
    let catalog = ProgramCatalog::seeded().unwrap();
    let availability = [
        None,
        Some(WeeklyAvailability::TwoToThreeDays),
        Some(WeeklyAvailability::FourDays),
        Some(WeeklyAvailability::FiveDays),
        Some(WeeklyAvailability::SixPlusDays),
    ];
    for level in ExperienceLevel::ALL {
        for days in availability {
            let id = recommend_program(level, days);
            let program = catalog.get_program_by_id(id).unwrap();
            assert!(program.is_recommended_for(level), "{id} for {level}");
        }
    }
}
