// ABOUTME: Logging configuration and structured logging setup for the coach library and CLI
// ABOUTME: Configures log levels, output formats, and domain event helpers over tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration.
//!
//! Log output goes to stderr so command output on stdout stays machine-readable.

use anyhow::Result;
use periodization_core::constants::service_names;
use periodization_core::models::ExperienceLevel;
use serde_json::json;
use std::env;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) or a full filter directive
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, production, testing)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for log shipping
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            service_name: service_names::PERIODIZATION_COACH.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") => LogFormat::Pretty,
            _ => LogFormat::Compact,
        };

        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);
        let is_production = environment == "production";

        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: defaults.service_version,
            environment,
        }
    }

    /// Raise the level to `debug` (CLI `--verbose`)
    #[must_use]
    pub fn verbose(mut self) -> Self {
        "debug".clone_into(&mut self.level);
        self
    }

    /// Initialize the global tracing subscriber
    ///
    /// A subscriber installed earlier (for example by a test harness) is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the level is not a valid filter directive
    pub fn init(&self) -> Result<()> {
        let env_filter = EnvFilter::try_new(&self.level)?;
        let registry = tracing_subscriber::registry().with(env_filter);

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };

        if installed.is_ok() {
            self.log_startup_info();
        }

        Ok(())
    }

    fn log_startup_info(&self) {
        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "location": self.include_location
            }
        });

        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            "Logging initialized: {}",
            config_summary
        );
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Domain event logging helpers
pub struct AppLogger;

impl AppLogger {
    /// Log a completed onboarding
    pub fn log_onboarding_completed(user_id: &str, level: ExperienceLevel, program_id: &str) {
        info!(
            user.id = %user_id,
            onboarding.level = %level,
            onboarding.program = %program_id,
            "Onboarding completed"
        );
    }

    /// Log a calculator invocation
    pub fn log_calculator_call(calculator: &str, success: bool) {
        debug!(
            calculator.name = %calculator,
            calculator.success = %success,
            "Calculator call"
        );
    }
}
