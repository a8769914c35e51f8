// ABOUTME: Configuration management module for the coach library and CLI
// ABOUTME: Re-exports environment configuration and the calculator configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: deployment mode, log level, and onboarding defaults from
//!   environment variables
//! - **Calculators**: factors and increments, owned by the calculation library

/// Environment and onboarding configuration
pub mod environment;

pub use environment::{CoachConfig, Environment, LogLevel, OnboardingDefaults};
pub use periodization_intelligence::config::{CalculatorConfig, ConfigError};
