// ABOUTME: Explicit per-session application state owned by the presentation layer
// ABOUTME: Holds view, theme, athlete profile, and current program with named mutation entry points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session state.
//!
//! One `SessionState` exists per running application instance. It is passed
//! explicitly to whoever needs it and changes only through the methods below.

use crate::catalog::ProgramCatalog;
use crate::quiz::{QuizAnswer, QuizEvaluation};
use crate::recommendation::RecommendationEngine;
use chrono::{DateTime, Utc};
use periodization_core::errors::{AppError, AppResult};
use periodization_core::models::{
    CurrentProgram, PeriodizationProgram, Phase, UserProfile, WeekAdvance,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Top-level screen shown after onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Overview
    #[default]
    Dashboard,
    /// Program details
    Program,
    /// Today's workout
    Workout,
    /// Training history
    History,
    /// Calculators
    Calculators,
    /// Preferences
    Settings,
}

impl View {
    /// Stable identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Program => "program",
            Self::Workout => "workout",
            Self::History => "history",
            Self::Calculators => "calculators",
            Self::Settings => "settings",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application state for one athlete session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    current_view: View,
    is_onboarding: bool,
    is_dark_mode: bool,
    user: Option<UserProfile>,
    current_program: Option<CurrentProgram>,
    selected_date: DateTime<Utc>,
    error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl SessionState {
    /// Fresh session awaiting onboarding, with `selected_date` as the focused day
    #[must_use]
    pub const fn new(selected_date: DateTime<Utc>) -> Self {
        Self {
            current_view: View::Dashboard,
            is_onboarding: true,
            is_dark_mode: false,
            user: None,
            current_program: None,
            selected_date,
            error: None,
        }
    }

    /// Screen currently shown
    #[must_use]
    pub const fn current_view(&self) -> View {
        self.current_view
    }

    /// Whether onboarding has yet to complete
    #[must_use]
    pub const fn is_onboarding(&self) -> bool {
        self.is_onboarding
    }

    /// Whether the dark theme is active
    #[must_use]
    pub const fn is_dark_mode(&self) -> bool {
        self.is_dark_mode
    }

    /// Athlete profile, once onboarded
    #[must_use]
    pub const fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Program state, once onboarded
    #[must_use]
    pub const fn current_program(&self) -> Option<&CurrentProgram> {
        self.current_program.as_ref()
    }

    /// Day the athlete is looking at
    #[must_use]
    pub const fn selected_date(&self) -> DateTime<Utc> {
        self.selected_date
    }

    /// Last recorded error message
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Switch screens
    pub fn update_view(&mut self, view: View) {
        debug!(from = %self.current_view, to = %view, "View changed");
        self.current_view = view;
    }

    /// Flip the theme, returning the new dark mode flag
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.is_dark_mode = !self.is_dark_mode;
        self.is_dark_mode
    }

    /// Focus a different day
    pub fn select_date(&mut self, date: DateTime<Utc>) {
        self.selected_date = date;
    }

    /// Record an error for display
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Dismiss the recorded error
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Finish onboarding from the submitted answers
    ///
    /// On success the session holds the new profile and program, leaves
    /// onboarding, and shows the dashboard. On failure the error is recorded
    /// and the session stays in onboarding. The profile is created once; a
    /// session that already finished onboarding is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if onboarding already completed, otherwise
    /// propagates the engine's error
    pub fn complete_onboarding(
        &mut self,
        engine: &RecommendationEngine<'_>,
        answers: &[QuizAnswer],
    ) -> AppResult<QuizEvaluation> {
        if !self.is_onboarding {
            return Err(AppError::invalid_input("Onboarding already completed"));
        }

        match engine.evaluate(answers) {
            Ok(recommendation) => {
                self.user = Some(recommendation.profile);
                self.current_program = Some(recommendation.current_program);
                self.is_onboarding = false;
                self.current_view = View::Dashboard;
                self.error = None;
                Ok(recommendation.evaluation)
            }
            Err(e) => {
                warn!("Onboarding failed: {e}");
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Catalog entry of the program being followed
    #[must_use]
    pub fn active_program<'c>(
        &self,
        catalog: &'c ProgramCatalog,
    ) -> Option<&'c PeriodizationProgram> {
        self.current_program
            .as_ref()
            .and_then(|current| catalog.get_program_by_id(&current.program_id))
    }

    /// Phase the athlete is currently in
    #[must_use]
    pub fn current_phase<'c>(&self, catalog: &'c ProgramCatalog) -> Option<&'c Phase> {
        let current = self.current_program.as_ref()?;
        self.active_program(catalog)?
            .phase(&current.current_phase)
    }

    /// Move the current program forward one week
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` before onboarding completes and `InternalError`
    /// if the followed program is missing from `catalog`
    pub fn advance_week(&mut self, catalog: &ProgramCatalog) -> AppResult<WeekAdvance> {
        let current = self
            .current_program
            .as_mut()
            .ok_or_else(|| AppError::invalid_input("No program is being followed"))?;
        let program = catalog.get_program_by_id(&current.program_id).ok_or_else(|| {
            AppError::internal(format!(
                "Program '{}' is not in the catalog",
                current.program_id
            ))
        })?;
        current.advance_week(program)
    }
}
