// ABOUTME: Step-by-step onboarding state machine over the fixed questionnaire
// ABOUTME: Validates answers before advancing, supports going back, and reports progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::answers::{AnswerSet, AnswerValue, QuizAnswer};
use super::questions::{question, questions, QuestionId, QuizQuestion};
use periodization_core::errors::{AppError, AppResult};
use tracing::debug;

/// Result of submitting an answer
#[derive(Debug, Clone, PartialEq)]
pub enum FlowStep {
    /// The next question to present
    Next(&'static QuizQuestion),
    /// Every question answered; the finalized answers
    Completed(AnswerSet),
}

/// Onboarding questionnaire walked one question at a time
#[derive(Debug, Clone, Default)]
pub struct OnboardingFlow {
    step: usize,
    answers: AnswerSet,
    completed: bool,
}

impl OnboardingFlow {
    /// Start at the first question
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-based index of the current question
    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Question currently presented
    #[must_use]
    pub fn current_question(&self) -> &'static QuizQuestion {
        let all = questions();
        &all[self.step.min(all.len() - 1)]
    }

    /// Whether the current question is the last one
    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.step + 1 >= questions().len()
    }

    /// Whether the flow has produced its final answer set
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Share of the questionnaire reached, counting the current question
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        (self.step + 1) as f64 / questions().len() as f64 * 100.0
    }

    /// Answers recorded so far
    #[must_use]
    pub const fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Previously recorded answer for the current question
    #[must_use]
    pub fn existing_answer(&self) -> Option<&AnswerValue> {
        self.answers.get(self.current_question().id)
    }

    /// Whether `value` lets the athlete leave the current question
    #[must_use]
    pub fn can_proceed(&self, value: &AnswerValue) -> bool {
        let current = self.current_question();
        !current.required || current.accepts(value)
    }

    /// Record an answer for the current question and move on
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if the answer does not satisfy the
    /// question, and `InvalidInput` once the flow has completed
    pub fn submit(&mut self, value: AnswerValue) -> AppResult<FlowStep> {
        if self.completed {
            return Err(AppError::invalid_input("Onboarding already completed"));
        }

        let current = self.current_question();
        if !self.can_proceed(&value) {
            return Err(AppError::missing_field(current.id.as_str()));
        }

        self.answers.record(QuizAnswer {
            question_id: current.id,
            answer: value,
        });

        if self.is_last_step() {
            self.completed = true;
            debug!(answers = self.answers.len(), "Onboarding questionnaire completed");
            return Ok(FlowStep::Completed(self.answers.clone()));
        }

        self.step += 1;
        debug!(step = self.step, question = %self.current_question().id, "Onboarding advanced");
        Ok(FlowStep::Next(self.current_question()))
    }

    /// Return to the previous question, yielding its recorded answer
    ///
    /// Staying on the first question yields `None`.
    pub fn back(&mut self) -> Option<&AnswerValue> {
        if self.step == 0 {
            return None;
        }
        self.step -= 1;
        self.existing_answer()
    }
}

/// Required questions without a usable answer, in questionnaire order
#[must_use]
pub fn missing_required(answers: &AnswerSet) -> Vec<QuestionId> {
    QuestionId::ALL
        .into_iter()
        .filter(|id| {
            let q = question(*id);
            q.required && !answers.get(*id).is_some_and(|value| q.accepts(value))
        })
        .collect()
}
