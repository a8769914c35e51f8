// ABOUTME: Configuration error types for calculator validation
// ABOUTME: Defines error variants for invalid ranges, out-of-range factors, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use periodization_core::errors::AppError;
use thiserror::Error;

/// Calculator configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two related values are inconsistent (e.g. a cap below its floor)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Numeric value outside the valid range for the parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Failed to parse an environment override
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string())
    }
}
