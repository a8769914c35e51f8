// ABOUTME: Enumerated answer codes for the questions that drive quiz evaluation
// ABOUTME: Maps experience, availability, session length, and knowledge answers to outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Answer codes.
//!
//! Evaluation never inspects free text directly. Each evaluated question has an
//! enumeration whose variants carry their outcome, and answers are resolved to a
//! variant by code first, then by the displayed label. Phrase containment is the
//! last resort so that legacy label text (for example `"5 dias por semana"`)
//! still resolves.

use super::questions::QuestionOption;
use periodization_core::models::ExperienceLevel;
use serde::{Deserialize, Serialize};

/// An enumerated answer for one question
///
/// `OPTIONS` is the only place a variant's code and label are written; the
/// questionnaire presents the same table.
pub trait AnswerCode: Sized + Copy + 'static {
    /// Every variant in option order
    const ALL: &'static [Self];

    /// Code and label of each variant, indexed by [`Self::position`]
    const OPTIONS: &'static [QuestionOption];

    /// Index of this variant in `ALL` and `OPTIONS`
    fn position(&self) -> usize;

    /// Option shown for this variant
    #[must_use]
    fn option(&self) -> &'static QuestionOption {
        &Self::OPTIONS[self.position()]
    }

    /// Stable code
    #[must_use]
    fn code(&self) -> &'static str {
        self.option().code
    }

    /// Displayed pt-BR label
    #[must_use]
    fn label(&self) -> &'static str {
        self.option().label
    }

    /// Distinctive phrase of the label used for containment matching
    fn match_phrase(&self) -> &'static str;

    /// Resolve an answer by exact code, exact label, then phrase containment
    #[must_use]
    fn from_answer(answer: &str) -> Option<Self> {
        let answer = answer.trim();
        if answer.is_empty() {
            return None;
        }
        Self::ALL
            .iter()
            .find(|c| c.code() == answer)
            .or_else(|| Self::ALL.iter().find(|c| c.label() == answer))
            .or_else(|| Self::ALL.iter().find(|c| answer.contains(c.match_phrase())))
            .copied()
    }
}

/// How long the athlete has been training
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceBand {
    /// Less than six months
    UnderSixMonths,
    /// Six months to a year
    SixToTwelveMonths,
    /// One to two years
    OneToTwoYears,
    /// Two to three years
    TwoToThreeYears,
    /// More than three years
    OverThreeYears,
}

impl ExperienceBand {
    /// Level before any knowledge demotion
    ///
    /// Anything under a year is treated as beginner.
    #[must_use]
    pub const fn base_level(self) -> ExperienceLevel {
        match self {
            Self::UnderSixMonths | Self::SixToTwelveMonths => ExperienceLevel::Beginner,
            Self::OneToTwoYears | Self::TwoToThreeYears => ExperienceLevel::Intermediate,
            Self::OverThreeYears => ExperienceLevel::Advanced,
        }
    }

    /// Representative months of training
    #[must_use]
    pub const fn months(self) -> u32 {
        match self {
            Self::UnderSixMonths => 3,
            Self::SixToTwelveMonths => 9,
            Self::OneToTwoYears => 18,
            Self::TwoToThreeYears => 30,
            Self::OverThreeYears => 48,
        }
    }
}

impl AnswerCode for ExperienceBand {
    const ALL: &'static [Self] = &[
        Self::UnderSixMonths,
        Self::SixToTwelveMonths,
        Self::OneToTwoYears,
        Self::TwoToThreeYears,
        Self::OverThreeYears,
    ];

    const OPTIONS: &'static [QuestionOption] = &[
        QuestionOption::new("under-6-months", "Menos de 6 meses (Iniciante)"),
        QuestionOption::new("6-to-12-months", "6 meses a 1 ano (Iniciante-Intermediário)"),
        QuestionOption::new("1-to-2-years", "1-2 anos (Intermediário)"),
        QuestionOption::new("2-to-3-years", "2-3 anos (Intermediário-Avançado)"),
        QuestionOption::new("over-3-years", "Mais de 3 anos (Avançado)"),
    ];

    fn position(&self) -> usize {
        *self as usize
    }

    fn match_phrase(&self) -> &'static str {
        match self {
            Self::UnderSixMonths => "Menos de 6 meses",
            Self::SixToTwelveMonths => "6 meses a 1 ano",
            Self::OneToTwoYears => "1-2 anos",
            Self::TwoToThreeYears => "2-3 anos",
            Self::OverThreeYears => "Mais de 3 anos",
        }
    }
}

/// Training days available per week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeeklyAvailability {
    /// Two or three days
    TwoToThreeDays,
    /// Four days
    FourDays,
    /// Five days
    FiveDays,
    /// Six or more days
    SixPlusDays,
}

impl WeeklyAvailability {
    /// Days per week recorded on the profile
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::TwoToThreeDays => 3,
            Self::FourDays => 4,
            Self::FiveDays => 5,
            Self::SixPlusDays => 6,
        }
    }
}

impl AnswerCode for WeeklyAvailability {
    const ALL: &'static [Self] = &[
        Self::TwoToThreeDays,
        Self::FourDays,
        Self::FiveDays,
        Self::SixPlusDays,
    ];

    const OPTIONS: &'static [QuestionOption] = &[
        QuestionOption::new("2-3-days", "2-3 dias"),
        QuestionOption::new("4-days", "4 dias"),
        QuestionOption::new("5-days", "5 dias"),
        QuestionOption::new("6-plus-days", "6+ dias"),
    ];

    fn position(&self) -> usize {
        *self as usize
    }

    fn match_phrase(&self) -> &'static str {
        self.label()
    }
}

/// Time available per session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionDuration {
    /// 30 to 45 minutes
    ThirtyToFortyFive,
    /// 45 to 60 minutes
    FortyFiveToSixty,
    /// 60 to 90 minutes
    SixtyToNinety,
    /// More than 90 minutes
    OverNinety,
}

impl SessionDuration {
    /// Representative minutes per session
    #[must_use]
    pub const fn minutes(self) -> u32 {
        match self {
            Self::ThirtyToFortyFive => 37,
            Self::FortyFiveToSixty => 52,
            Self::SixtyToNinety => 75,
            Self::OverNinety => 105,
        }
    }
}

impl AnswerCode for SessionDuration {
    const ALL: &'static [Self] = &[
        Self::ThirtyToFortyFive,
        Self::FortyFiveToSixty,
        Self::SixtyToNinety,
        Self::OverNinety,
    ];

    const OPTIONS: &'static [QuestionOption] = &[
        QuestionOption::new("30-45-min", "30-45 minutos"),
        QuestionOption::new("45-60-min", "45-60 minutos"),
        QuestionOption::new("60-90-min", "60-90 minutos"),
        QuestionOption::new("over-90-min", "Mais de 90 minutos"),
    ];

    fn position(&self) -> usize {
        *self as usize
    }

    fn match_phrase(&self) -> &'static str {
        match self {
            Self::ThirtyToFortyFive => "30-45",
            Self::FortyFiveToSixty => "45-60",
            Self::SixtyToNinety => "60-90",
            Self::OverNinety => "Mais de 90",
        }
    }
}

/// Self-assessed knowledge of periodization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodizationKnowledge {
    /// Never heard of it
    NeverHeard,
    /// Superficial familiarity
    Superficial,
    /// Basic knowledge
    Basic,
    /// Knows the concepts well
    Solid,
    /// Has applied it in practice
    Practical,
}

impl PeriodizationKnowledge {
    /// Whether this answer drops the experience level one tier
    #[must_use]
    pub const fn demotes_level(self) -> bool {
        matches!(self, Self::NeverHeard | Self::Superficial)
    }
}

impl AnswerCode for PeriodizationKnowledge {
    const ALL: &'static [Self] = &[
        Self::NeverHeard,
        Self::Superficial,
        Self::Basic,
        Self::Solid,
        Self::Practical,
    ];

    const OPTIONS: &'static [QuestionOption] = &[
        QuestionOption::new("never-heard", "Nunca ouvi falar"),
        QuestionOption::new("superficial", "Conheço superficialmente"),
        QuestionOption::new("basic", "Tenho conhecimento básico"),
        QuestionOption::new("solid", "Conheço bem os conceitos"),
        QuestionOption::new("practical", "Tenho experiência prática"),
    ];

    fn position(&self) -> usize {
        *self as usize
    }

    fn match_phrase(&self) -> &'static str {
        match self {
            Self::NeverHeard => "Nunca ouvi falar",
            Self::Superficial => "superficialmente",
            Self::Basic => "conhecimento básico",
            Self::Solid => "Conheço bem",
            Self::Practical => "experiência prática",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_by_code_label_and_phrase() {
        assert_eq!(
            ExperienceBand::from_answer("1-to-2-years"),
            Some(ExperienceBand::OneToTwoYears)
        );
        assert_eq!(
            ExperienceBand::from_answer("Mais de 3 anos (Avançado)"),
            Some(ExperienceBand::OverThreeYears)
        );
        assert_eq!(
            WeeklyAvailability::from_answer("5 dias por semana"),
            Some(WeeklyAvailability::FiveDays)
        );
        assert_eq!(
            PeriodizationKnowledge::from_answer("Só conheço superficialmente"),
            Some(PeriodizationKnowledge::Superficial)
        );
    }

    #[test]
    fn test_unmatched_answers_resolve_to_none() {
        assert_eq!(ExperienceBand::from_answer(""), None);
        assert_eq!(WeeklyAvailability::from_answer("todo dia"), None);
        assert_eq!(SessionDuration::from_answer("   "), None);
    }
}
