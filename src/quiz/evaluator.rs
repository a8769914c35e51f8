// ABOUTME: Derives experience level, recommended program, and training metrics from quiz answers
// ABOUTME: Pure mapping over answer codes where every unmatched answer has a fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::answers::AnswerSet;
use super::codes::{AnswerCode, ExperienceBand, PeriodizationKnowledge, WeeklyAvailability};
use super::questions::QuestionId;
use periodization_core::constants::onboarding::{DEFAULT_EXPERIENCE_MONTHS, DEFAULT_WEEKLY_DAYS};
use periodization_core::constants::program_ids;
use periodization_core::models::ExperienceLevel;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of evaluating a finalized answer set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizEvaluation {
    /// Level after knowledge demotion
    pub level: ExperienceLevel,
    /// Catalog id of the recommended program
    pub recommended_program_id: String,
    /// Training experience in months
    pub experience_months: u32,
    /// Training days per week
    pub weekly_availability: u32,
}

/// Program id for a level and weekly availability
///
/// Beginners always get the linear program. Intermediates get the undulating
/// program on four or five days. Advanced athletes get the conjugate program on
/// six or more days, the block program on four or five, and the undulating
/// program otherwise.
#[must_use]
pub const fn recommend_program(
    level: ExperienceLevel,
    availability: Option<WeeklyAvailability>,
) -> &'static str {
    match (level, availability) {
        (ExperienceLevel::Beginner, _) => program_ids::LINEAR_BASIC,
        (
            ExperienceLevel::Intermediate,
            Some(WeeklyAvailability::FourDays | WeeklyAvailability::FiveDays),
        ) => program_ids::UNDULATING_DUP,
        (ExperienceLevel::Intermediate, _) => program_ids::LINEAR_BASIC,
        (ExperienceLevel::Advanced, Some(WeeklyAvailability::SixPlusDays)) => {
            program_ids::CONJUGATE_WESTSIDE
        }
        (
            ExperienceLevel::Advanced,
            Some(WeeklyAvailability::FourDays | WeeklyAvailability::FiveDays),
        ) => program_ids::BLOCK_CONJUGATE,
        (ExperienceLevel::Advanced, _) => program_ids::UNDULATING_DUP,
    }
}

/// Evaluate a finalized answer set
#[must_use]
pub fn evaluate_quiz(answers: &AnswerSet) -> QuizEvaluation {
    let experience = answers
        .text(QuestionId::Experience)
        .and_then(ExperienceBand::from_answer);
    let availability = answers
        .text(QuestionId::Availability)
        .and_then(WeeklyAvailability::from_answer);
    let knowledge = answers
        .text(QuestionId::PeriodizationKnowledge)
        .and_then(PeriodizationKnowledge::from_answer);

    let base_level = experience.map_or(ExperienceLevel::Beginner, ExperienceBand::base_level);
    let level = if knowledge.is_some_and(PeriodizationKnowledge::demotes_level) {
        base_level.demoted()
    } else {
        base_level
    };

    let evaluation = QuizEvaluation {
        level,
        recommended_program_id: recommend_program(level, availability).to_owned(),
        experience_months: experience.map_or(DEFAULT_EXPERIENCE_MONTHS, ExperienceBand::months),
        weekly_availability: availability.map_or(DEFAULT_WEEKLY_DAYS, WeeklyAvailability::days),
    };

    debug!(
        experience = ?experience,
        availability = ?availability,
        knowledge = ?knowledge,
        level = %evaluation.level,
        program = %evaluation.recommended_program_id,
        "Evaluated onboarding quiz"
    );

    evaluation
}
