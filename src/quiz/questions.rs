// ABOUTME: The fixed onboarding questionnaire with stable question and option codes
// ABOUTME: Declares question kinds, pt-BR prompts, option labels, and answer acceptance rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::answers::AnswerValue;
use super::codes::{
    AnswerCode, ExperienceBand, PeriodizationKnowledge, SessionDuration, WeeklyAvailability,
};
use periodization_core::constants::onboarding::{BODY_WEIGHT_MAX_KG, BODY_WEIGHT_MIN_KG};
use periodization_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of an onboarding question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionId {
    /// Display name
    Name,
    /// Training experience band
    Experience,
    /// Training goals (up to three)
    Goals,
    /// Training days per week
    Availability,
    /// Minutes per session
    SessionDuration,
    /// Accessible equipment
    Equipment,
    /// Preferred training split
    TrainingSplit,
    /// Injury history
    InjuryHistory,
    /// Self-assessed periodization knowledge
    PeriodizationKnowledge,
    /// Main motivation
    Motivation,
    /// Body weight in kg
    BodyWeight,
}

impl QuestionId {
    /// All questions in presentation order
    pub const ALL: [Self; 11] = [
        Self::Name,
        Self::Experience,
        Self::Goals,
        Self::Availability,
        Self::SessionDuration,
        Self::Equipment,
        Self::TrainingSplit,
        Self::InjuryHistory,
        Self::PeriodizationKnowledge,
        Self::Motivation,
        Self::BodyWeight,
    ];

    /// Stable identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Experience => "experience",
            Self::Goals => "goals",
            Self::Availability => "availability",
            Self::SessionDuration => "session-duration",
            Self::Equipment => "equipment",
            Self::TrainingSplit => "training-split",
            Self::InjuryHistory => "injury-history",
            Self::PeriodizationKnowledge => "periodization-knowledge",
            Self::Motivation => "motivation",
            Self::BodyWeight => "body-weight",
        }
    }

    /// Zero-based position in the questionnaire
    #[must_use]
    pub const fn position(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown question id: '{wanted}'")))
    }
}

/// How a question is answered
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Free text
    Input,
    /// Exactly one option
    Single,
    /// One or more options
    Multiple,
    /// Number within inclusive bounds
    Range {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
}

/// Selectable option: stable code plus the displayed label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    /// Stable code
    pub code: &'static str,
    /// pt-BR label shown to the athlete
    pub label: &'static str,
}

impl QuestionOption {
    /// Option with a stable code and its displayed label
    #[must_use]
    pub const fn new(code: &'static str, label: &'static str) -> Self {
        Self { code, label }
    }
}

/// One onboarding question
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuizQuestion {
    /// Identifier
    pub id: QuestionId,
    /// pt-BR prompt
    pub prompt: &'static str,
    /// Answer shape
    #[serde(flatten)]
    pub kind: QuestionKind,
    /// Options for single and multiple choice questions
    pub options: &'static [QuestionOption],
    /// Whether the flow refuses to advance without an answer
    pub required: bool,
}

impl QuizQuestion {
    /// Option matching `answer` by code or label
    #[must_use]
    pub fn option(&self, answer: &str) -> Option<&'static QuestionOption> {
        let answer = answer.trim();
        self.options
            .iter()
            .find(|o| o.code == answer || o.label == answer)
    }

    /// Whether `value` is a usable answer for this question
    ///
    /// Single choice answers must name one of the options by code or label.
    /// Text must be non-blank, selections non-empty, and range answers numeric
    /// and within bounds. Numbers answer input questions when non-zero.
    #[must_use]
    pub fn accepts(&self, value: &AnswerValue) -> bool {
        match self.kind {
            QuestionKind::Single => value
                .as_text()
                .is_some_and(|answer| self.option(answer).is_some()),
            QuestionKind::Multiple => value.as_selections().is_some_and(|s| !s.is_empty()),
            QuestionKind::Range { min, max } => value
                .as_number()
                .is_some_and(|n| n.is_finite() && n >= min && n <= max),
            QuestionKind::Input => match value {
                AnswerValue::Number(n) => *n != 0.0,
                AnswerValue::Text(text) => !text.trim().is_empty(),
                AnswerValue::Selections(items) => {
                    items.len() == 1 && items.iter().all(|s| !s.trim().is_empty())
                }
            },
        }
    }
}

const GOAL_OPTIONS: [QuestionOption; 6] = [
    QuestionOption::new("muscle-gain", "Ganhar massa muscular"),
    QuestionOption::new("strength", "Aumentar força"),
    QuestionOption::new("definition", "Melhorar definição"),
    QuestionOption::new("athletic-performance", "Melhorar performance atlética"),
    QuestionOption::new("injury-prevention", "Reabilitação/prevenção de lesões"),
    QuestionOption::new("general-health", "Melhora da saúde geral"),
];

const EQUIPMENT_OPTIONS: [QuestionOption; 8] = [
    QuestionOption::new("barbell", "Barras e anilhas"),
    QuestionOption::new("dumbbells", "Halteres"),
    QuestionOption::new("machines", "Máquinas de musculação"),
    QuestionOption::new("cables", "Cabo/polia"),
    QuestionOption::new("pull-up-bar", "Barra fixa"),
    QuestionOption::new("parallel-bars", "Paralelas"),
    QuestionOption::new("kettlebells", "Kettlebells"),
    QuestionOption::new("bands", "Elásticos/faixas"),
];

const SPLIT_OPTIONS: [QuestionOption; 5] = [
    QuestionOption::new("full-body", "Corpo inteiro (Full Body)"),
    QuestionOption::new("upper-lower", "Superior/Inferior (Upper/Lower)"),
    QuestionOption::new("push-pull-legs", "Push/Pull/Legs"),
    QuestionOption::new("body-part", "Divisão por grupos musculares"),
    QuestionOption::new("no-preference", "Não tenho preferência"),
];

const INJURY_OPTIONS: [QuestionOption; 5] = [
    QuestionOption::new("none", "Nenhuma limitação"),
    QuestionOption::new("knee", "Problemas no joelho"),
    QuestionOption::new("back", "Problemas nas costas"),
    QuestionOption::new("shoulder", "Problemas no ombro"),
    QuestionOption::new("other", "Outras limitações"),
];

const MOTIVATION_OPTIONS: [QuestionOption; 5] = [
    QuestionOption::new("aesthetics", "Resultados estéticos"),
    QuestionOption::new("performance", "Performance e força"),
    QuestionOption::new("health", "Saúde e bem-estar"),
    QuestionOption::new("competition", "Competição/esporte"),
    QuestionOption::new("challenge", "Desafio pessoal"),
];

static QUESTIONS: [QuizQuestion; 11] = [
    QuizQuestion {
        id: QuestionId::Name,
        prompt: "Como você gostaria de ser chamado?",
        kind: QuestionKind::Input,
        options: &[],
        required: true,
    },
    QuizQuestion {
        id: QuestionId::Experience,
        prompt: "Há quanto tempo você treina musculação?",
        kind: QuestionKind::Single,
        options: ExperienceBand::OPTIONS,
        required: true,
    },
    QuizQuestion {
        id: QuestionId::Goals,
        prompt: "Quais são seus principais objetivos? (Selecione até 3)",
        kind: QuestionKind::Multiple,
        options: &GOAL_OPTIONS,
        required: true,
    },
    QuizQuestion {
        id: QuestionId::Availability,
        prompt: "Quantos dias por semana você pode treinar?",
        kind: QuestionKind::Single,
        options: WeeklyAvailability::OPTIONS,
        required: true,
    },
    QuizQuestion {
        id: QuestionId::SessionDuration,
        prompt: "Quanto tempo você tem disponível por treino?",
        kind: QuestionKind::Single,
        options: SessionDuration::OPTIONS,
        required: true,
    },
    QuizQuestion {
        id: QuestionId::Equipment,
        prompt: "Que equipamentos você tem acesso? (Selecione todos que se aplicam)",
        kind: QuestionKind::Multiple,
        options: &EQUIPMENT_OPTIONS,
        required: true,
    },
    QuizQuestion {
        id: QuestionId::TrainingSplit,
        prompt: "Que tipo de divisão de treino você prefere?",
        kind: QuestionKind::Single,
        options: &SPLIT_OPTIONS,
        required: true,
    },
    QuizQuestion {
        id: QuestionId::InjuryHistory,
        prompt: "Você tem histórico de lesões ou limitações?",
        kind: QuestionKind::Single,
        options: &INJURY_OPTIONS,
        required: true,
    },
    QuizQuestion {
        id: QuestionId::PeriodizationKnowledge,
        prompt: "Qual seu nível de conhecimento sobre periodização?",
        kind: QuestionKind::Single,
        options: PeriodizationKnowledge::OPTIONS,
        required: true,
    },
    QuizQuestion {
        id: QuestionId::Motivation,
        prompt: "O que mais te motiva a treinar?",
        kind: QuestionKind::Single,
        options: &MOTIVATION_OPTIONS,
        required: true,
    },
    QuizQuestion {
        id: QuestionId::BodyWeight,
        prompt: "Qual seu peso corporal atual? (kg)",
        kind: QuestionKind::Range {
            min: BODY_WEIGHT_MIN_KG,
            max: BODY_WEIGHT_MAX_KG,
        },
        options: &[],
        required: true,
    },
];

/// The questionnaire in presentation order
#[must_use]
pub fn questions() -> &'static [QuizQuestion] {
    &QUESTIONS
}

/// Question definition for `id`
#[must_use]
pub fn question(id: QuestionId) -> &'static QuizQuestion {
    &QUESTIONS[id.position()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_table_follows_id_order() {
        for (index, q) in questions().iter().enumerate() {
            assert_eq!(q.id.position(), index);
            assert_eq!(question(q.id).id, q.id);
        }
    }

    #[test]
    fn test_option_codes_are_unique_per_question() {
        for q in questions() {
            let mut codes: Vec<_> = q.options.iter().map(|o| o.code).collect();
            codes.sort_unstable();
            codes.dedup();
            assert_eq!(codes.len(), q.options.len(), "{}", q.id);
        }
    }

    #[test]
    fn test_single_choice_accepts_only_its_options() {
        let experience = question(QuestionId::Experience);
        assert!(experience.accepts(&AnswerValue::Text("1-to-2-years".into())));
        assert!(experience.accepts(&AnswerValue::Text("1-2 anos (Intermediário)".into())));
        assert!(experience.accepts(&AnswerValue::Selections(vec!["over-3-years".into()])));
        assert!(!experience.accepts(&AnswerValue::Text("banana".into())));
        assert!(!experience.accepts(&AnswerValue::Number(2.0)));
    }

    #[test]
    fn test_evaluated_options_resolve_to_their_variant() {
        fn check<C: AnswerCode + PartialEq + std::fmt::Debug>(id: QuestionId) {
            let q = question(id);
            assert_eq!(q.options, C::OPTIONS);
            for (variant, option) in C::ALL.iter().zip(q.options) {
                assert_eq!(C::from_answer(option.code), Some(*variant), "{}", option.code);
                assert_eq!(C::from_answer(option.label), Some(*variant), "{}", option.label);
                assert_eq!(variant.code(), option.code);
            }
            assert_eq!(C::ALL.len(), q.options.len());
        }

        check::<ExperienceBand>(QuestionId::Experience);
        check::<WeeklyAvailability>(QuestionId::Availability);
        check::<SessionDuration>(QuestionId::SessionDuration);
        check::<PeriodizationKnowledge>(QuestionId::PeriodizationKnowledge);
    }

    #[test]
    fn test_range_accepts_numeric_text() {
        let body_weight = question(QuestionId::BodyWeight);
        assert!(body_weight.accepts(&AnswerValue::Text("82.5".into())));
        assert!(!body_weight.accepts(&AnswerValue::Number(39.0)));
        assert!(!body_weight.accepts(&AnswerValue::Text("heavy".into())));
    }
}
