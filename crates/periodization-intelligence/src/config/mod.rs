// ABOUTME: Configuration module for the calculation library
// ABOUTME: Re-exports calculator configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Calculator factors, increments, and recovery weights
pub mod calculator;
/// Configuration validation errors
pub mod error;

pub use calculator::{CalculatorConfig, ProgressionConfig, RecoveryConfig};
pub use error::ConfigError;
