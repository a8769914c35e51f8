// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses deployment mode, log level, and onboarding defaults from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use anyhow::{anyhow, Context, Result};
use periodization_core::constants::onboarding;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::{debug, Level};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational events
    Info,
    /// Evaluation steps
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Warn,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Profile values used when the quiz leaves a field unanswered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingDefaults {
    /// Display name for a blank or missing name answer
    pub display_name: String,
    /// Body weight in kg for a missing or unparseable answer
    pub body_weight_kg: f64,
    /// Session length for an unrecognized duration answer
    pub session_minutes: u32,
}

impl Default for OnboardingDefaults {
    fn default() -> Self {
        Self {
            display_name: onboarding::DEFAULT_DISPLAY_NAME.to_owned(),
            body_weight_kg: onboarding::DEFAULT_BODY_WEIGHT_KG,
            session_minutes: onboarding::DEFAULT_SESSION_MINUTES,
        }
    }
}

/// Coach configuration loaded from the environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CoachConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Onboarding fallbacks
    pub onboarding: OnboardingDefaults,
    /// Reject evaluation while required questions are unanswered
    pub enforce_required_answers: bool,
}

impl CoachConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or boolean variable cannot be parsed or the
    /// resulting configuration is invalid
    pub fn from_env() -> Result<Self> {
        let defaults = OnboardingDefaults::default();

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development")),
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "warn")),
            onboarding: OnboardingDefaults {
                display_name: env_var_or("COACH_DEFAULT_NAME", &defaults.display_name),
                body_weight_kg: env_var_or(
                    "COACH_DEFAULT_BODY_WEIGHT_KG",
                    &defaults.body_weight_kg.to_string(),
                )
                .parse()
                .context("Invalid COACH_DEFAULT_BODY_WEIGHT_KG value")?,
                session_minutes: env_var_or(
                    "COACH_DEFAULT_SESSION_MINUTES",
                    &defaults.session_minutes.to_string(),
                )
                .parse()
                .context("Invalid COACH_DEFAULT_SESSION_MINUTES value")?,
            },
            enforce_required_answers: env_var_or("COACH_ENFORCE_REQUIRED", "false")
                .parse()
                .context("Invalid COACH_ENFORCE_REQUIRED value")?,
        };

        config.validate()?;
        debug!("{}", config.summary());
        Ok(config)
    }

    /// Validate onboarding defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a default is blank or not positive
    pub fn validate(&self) -> Result<()> {
        let onboarding = &self.onboarding;
        if onboarding.display_name.trim().is_empty() {
            return Err(anyhow!("COACH_DEFAULT_NAME cannot be blank"));
        }
        if !onboarding.body_weight_kg.is_finite() || onboarding.body_weight_kg <= 0.0 {
            return Err(anyhow!("COACH_DEFAULT_BODY_WEIGHT_KG must be positive"));
        }
        if onboarding.session_minutes == 0 {
            return Err(anyhow!("COACH_DEFAULT_SESSION_MINUTES must be positive"));
        }
        Ok(())
    }

    /// Loggable description of the configuration
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Periodization Coach Configuration:\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Default Name: {}\n\
             - Default Body Weight: {} kg\n\
             - Default Session: {} min\n\
             - Required Answers: {}",
            self.environment,
            self.log_level,
            self.onboarding.display_name,
            self.onboarding.body_weight_kg,
            self.onboarding.session_minutes,
            if self.enforce_required_answers {
                "Enforced"
            } else {
                "Optional"
            },
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
