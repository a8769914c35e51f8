// ABOUTME: Recommendation orchestrator turning finalized quiz answers into a profile and program
// ABOUTME: Evaluates the quiz, resolves the program from the catalog, and seeds program state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recommendation Orchestrator
//!
//! The single entry point from a completed onboarding to a usable athlete
//! profile and the program they start following. Missing answers fall back to
//! configured defaults. The only failure is a recommended program id missing
//! from the catalog, which is reported as an internal error.

use crate::catalog::ProgramCatalog;
use crate::config::{CoachConfig, OnboardingDefaults};
use crate::logging::AppLogger;
use crate::quiz::{
    evaluate_quiz, missing_required, AnswerCode, AnswerSet, QuestionId, QuizAnswer,
    QuizEvaluation, SessionDuration,
};
use chrono::{DateTime, Utc};
use periodization_core::errors::{AppError, AppResult};
use periodization_core::models::{CurrentProgram, TrainingPreferences, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

/// Profile and starting program produced by a completed onboarding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Quiz outcome the recommendation was built from
    pub evaluation: QuizEvaluation,
    /// Newly created athlete profile
    pub profile: UserProfile,
    /// Program state seeded at week 1
    pub current_program: CurrentProgram,
}

/// Builds recommendations against a program catalog
#[derive(Debug, Clone)]
pub struct RecommendationEngine<'a> {
    catalog: &'a ProgramCatalog,
    defaults: OnboardingDefaults,
    enforce_required_answers: bool,
}

impl Default for RecommendationEngine<'static> {
    fn default() -> Self {
        Self::new(ProgramCatalog::global(), OnboardingDefaults::default())
    }
}

impl<'a> RecommendationEngine<'a> {
    /// Engine over `catalog` with the given profile fallbacks
    #[must_use]
    pub fn new(catalog: &'a ProgramCatalog, defaults: OnboardingDefaults) -> Self {
        Self {
            catalog,
            defaults,
            enforce_required_answers: false,
        }
    }

    /// Refuse answer sets that leave required questions unanswered
    #[must_use]
    pub fn enforce_required_answers(mut self, enforce: bool) -> Self {
        self.enforce_required_answers = enforce;
        self
    }

    /// Catalog the engine resolves programs from
    #[must_use]
    pub const fn catalog(&self) -> &'a ProgramCatalog {
        self.catalog
    }

    /// Profile fallbacks in use
    #[must_use]
    pub const fn defaults(&self) -> &OnboardingDefaults {
        &self.defaults
    }

    /// Evaluate a submission sequence, timestamped now
    ///
    /// # Errors
    ///
    /// See [`Self::evaluate_answer_set`]
    pub fn evaluate(&self, answers: &[QuizAnswer]) -> AppResult<Recommendation> {
        self.evaluate_at(answers, Utc::now())
    }

    /// Evaluate a submission sequence with an explicit creation time
    ///
    /// Repeated answers to the same question keep the last one.
    ///
    /// # Errors
    ///
    /// See [`Self::evaluate_answer_set`]
    pub fn evaluate_at(
        &self,
        answers: &[QuizAnswer],
        now: DateTime<Utc>,
    ) -> AppResult<Recommendation> {
        let answer_set = AnswerSet::from_answers(answers.iter().cloned());
        self.evaluate_answer_set(&answer_set, now)
    }

    /// Evaluate a finalized answer set
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when required answers are enforced and
    /// absent, and `InternalError` if the recommended program is not in the
    /// catalog
    pub fn evaluate_answer_set(
        &self,
        answers: &AnswerSet,
        now: DateTime<Utc>,
    ) -> AppResult<Recommendation> {
        if self.enforce_required_answers {
            let missing = missing_required(answers);
            if !missing.is_empty() {
                let fields: Vec<&str> = missing.iter().map(QuestionId::as_str).collect();
                return Err(AppError::missing_field(fields.join(", ")));
            }
        }

        let evaluation = evaluate_quiz(answers);

        let Some(program) = self
            .catalog
            .get_program_by_id(&evaluation.recommended_program_id)
        else {
            error!(
                program_id = %evaluation.recommended_program_id,
                level = %evaluation.level,
                "Recommended program is missing from the catalog"
            );
            return Err(AppError::internal(format!(
                "Recommended program '{}' is not in the catalog",
                evaluation.recommended_program_id
            )));
        };

        let profile = self.build_profile(answers, &evaluation, now);
        let current_program = CurrentProgram::new(profile.id, program, now)?;

        AppLogger::log_onboarding_completed(
            &profile.id.to_string(),
            evaluation.level,
            &program.id,
        );

        Ok(Recommendation {
            evaluation,
            profile,
            current_program,
        })
    }

    fn build_profile(
        &self,
        answers: &AnswerSet,
        evaluation: &QuizEvaluation,
        now: DateTime<Utc>,
    ) -> UserProfile {
        let name = answers
            .text(QuestionId::Name)
            .map_or_else(|| self.defaults.display_name.clone(), str::to_owned);

        let minutes_per_session = answers
            .text(QuestionId::SessionDuration)
            .and_then(SessionDuration::from_answer)
            .map_or(self.defaults.session_minutes, SessionDuration::minutes);

        let body_weight_kg = answers
            .number(QuestionId::BodyWeight)
            .filter(|kg| kg.is_finite() && *kg > 0.0)
            .unwrap_or(self.defaults.body_weight_kg);

        UserProfile {
            id: Uuid::new_v4(),
            name,
            level: evaluation.level,
            experience_months: evaluation.experience_months,
            weekly_availability: evaluation.weekly_availability,
            goals: answers.selections(QuestionId::Goals).to_vec(),
            preferences: TrainingPreferences {
                preferred_split: answers
                    .text(QuestionId::TrainingSplit)
                    .unwrap_or_default()
                    .to_owned(),
                available_equipment: answers.selections(QuestionId::Equipment).to_vec(),
                minutes_per_session,
            },
            body_weight_kg,
            created_at: now,
        }
    }
}

impl RecommendationEngine<'static> {
    /// Engine over the global catalog configured from `config`
    #[must_use]
    pub fn from_config(config: &CoachConfig) -> Self {
        Self::new(ProgramCatalog::global(), config.onboarding.clone())
            .enforce_required_answers(config.enforce_required_answers)
    }
}

/// Evaluate answers with the global catalog and default fallbacks
///
/// # Errors
///
/// Returns `InternalError` if the recommended program is not in the catalog
pub fn evaluate(answers: &[QuizAnswer]) -> AppResult<Recommendation> {
    RecommendationEngine::default().evaluate(answers)
}
