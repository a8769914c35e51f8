// ABOUTME: Quiz answer values and the de-duplicated answer set submitted at onboarding
// ABOUTME: Enforces one answer per question and loads answer sets from JSON files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::questions::QuestionId;
use periodization_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Answer payload: a number, free or selected text, or several selections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Numeric answer (range questions)
    Number(f64),
    /// Free text or a single selected option
    Text(String),
    /// Selected options of a multiple choice question
    Selections(Vec<String>),
}

impl AnswerValue {
    /// Text of a text answer, or of a single selection
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Selections(items) if items.len() == 1 => items.first().map(String::as_str),
            Self::Number(_) | Self::Selections(_) => None,
        }
    }

    /// Selections; a lone text answer counts as one selection
    #[must_use]
    pub fn as_selections(&self) -> Option<&[String]> {
        match self {
            Self::Selections(items) => Some(items),
            Self::Text(text) => Some(std::slice::from_ref(text)),
            Self::Number(_) => None,
        }
    }

    /// Numeric value of a number or numeric text answer
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(text) => text.trim().replace(',', ".").parse().ok(),
            Self::Selections(_) => None,
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(value: Vec<String>) -> Self {
        Self::Selections(value)
    }
}

/// One answered question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizAnswer {
    /// Answered question
    pub question_id: QuestionId,
    /// Answer payload
    pub answer: AnswerValue,
}

impl QuizAnswer {
    /// Pair a question with its answer
    #[must_use]
    pub fn new(question_id: QuestionId, answer: impl Into<AnswerValue>) -> Self {
        Self {
            question_id,
            answer: answer.into(),
        }
    }
}

/// Answers keyed by question, at most one per question
///
/// Entries keep the order of their latest submission.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<QuizAnswer>", into = "Vec<QuizAnswer>")]
pub struct AnswerSet {
    answers: Vec<QuizAnswer>,
}

impl AnswerSet {
    /// Empty answer set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            answers: Vec::new(),
        }
    }

    /// Build from a submission sequence; a later answer replaces an earlier one
    #[must_use]
    pub fn from_answers<I>(answers: I) -> Self
    where
        I: IntoIterator<Item = QuizAnswer>,
    {
        let mut set = Self::new();
        for answer in answers {
            set.record(answer);
        }
        set
    }

    /// Parse a JSON array of `{ "question_id", "answer" }` objects
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the document is not a valid answer list
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let answers: Vec<QuizAnswer> = serde_json::from_str(json)?;
        Ok(Self::from_answers(answers))
    }

    /// Store `answer`, returning the value it replaced
    pub fn record(&mut self, answer: QuizAnswer) -> Option<AnswerValue> {
        let previous = self
            .answers
            .iter()
            .position(|a| a.question_id == answer.question_id)
            .map(|index| self.answers.remove(index).answer);
        if previous.is_some() {
            debug!(question = %answer.question_id, "Replaced quiz answer");
        }
        self.answers.push(answer);
        previous
    }

    /// Answer for `id`
    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&AnswerValue> {
        self.answers
            .iter()
            .find(|a| a.question_id == id)
            .map(|a| &a.answer)
    }

    /// Trimmed, non-blank text answer for `id`
    #[must_use]
    pub fn text(&self, id: QuestionId) -> Option<&str> {
        self.get(id)
            .and_then(AnswerValue::as_text)
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Selections for `id`; empty when unanswered
    #[must_use]
    pub fn selections(&self, id: QuestionId) -> &[String] {
        self.get(id)
            .and_then(AnswerValue::as_selections)
            .unwrap_or_default()
    }

    /// Numeric answer for `id`
    #[must_use]
    pub fn number(&self, id: QuestionId) -> Option<f64> {
        self.get(id).and_then(AnswerValue::as_number)
    }

    /// Whether `id` has an answer
    #[must_use]
    pub fn contains(&self, id: QuestionId) -> bool {
        self.get(id).is_some()
    }

    /// Answers in submission order
    #[must_use]
    pub fn as_slice(&self) -> &[QuizAnswer] {
        &self.answers
    }

    /// Number of answered questions
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether nothing has been answered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Consume into the answer list
    #[must_use]
    pub fn into_vec(self) -> Vec<QuizAnswer> {
        self.answers
    }
}

impl From<Vec<QuizAnswer>> for AnswerSet {
    fn from(answers: Vec<QuizAnswer>) -> Self {
        Self::from_answers(answers)
    }
}

impl From<AnswerSet> for Vec<QuizAnswer> {
    fn from(set: AnswerSet) -> Self {
        set.answers
    }
}

impl FromIterator<QuizAnswer> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = QuizAnswer>>(iter: I) -> Self {
        Self::from_answers(iter)
    }
}

/// Read an answer set from a JSON file
///
/// # Errors
///
/// Returns `InvalidInput` if the file cannot be read and `SerializationError`
/// if its content is not a valid answer list
pub fn load_answers_file(path: impl AsRef<Path>) -> AppResult<AnswerSet> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!(
            "Cannot read answers file {}: {e}",
            path.display()
        ))
    })?;
    let answers = AnswerSet::from_json_str(&content)?;
    debug!(path = %path.display(), answers = answers.len(), "Loaded quiz answers");
    Ok(answers)
}
