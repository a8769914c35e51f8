// ABOUTME: Calculator configuration with environment overrides and validation
// ABOUTME: Holds the default 1RM formula, deload and training-max factors, progression, and recovery weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calculator configuration.
//!
//! Defaults reproduce the published calculator behavior. `load()` applies
//! `PERIODIZATION_*` environment overrides and validates the result.

use super::error::ConfigError;
use crate::algorithms::one_rep_max::OneRepMaxAlgorithm;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Default deload multiplier
pub const DEFAULT_DELOAD_FACTOR: f64 = 0.8;
/// Default training-max multiplier
pub const DEFAULT_TRAINING_MAX_FACTOR: f64 = 0.9;
/// Loads at or above this use the heavy increment
pub const DEFAULT_HEAVY_WEIGHT_THRESHOLD_KG: f64 = 100.0;
/// Increment for heavy loads
pub const DEFAULT_HEAVY_INCREMENT_KG: f64 = 5.0;
/// Increment for light loads
pub const DEFAULT_LIGHT_INCREMENT_KG: f64 = 2.5;
/// Baseline recovery window in hours
pub const DEFAULT_RECOVERY_BASE_HOURS: f64 = 24.0;

static CALCULATOR_CONFIG: OnceLock<CalculatorConfig> = OnceLock::new();

/// Progressive overload increments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Loads at or above this threshold progress by `heavy_increment`
    pub heavy_weight_threshold: f64,
    /// Increment applied to heavy loads
    pub heavy_increment: f64,
    /// Increment applied below the threshold
    pub light_increment: f64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            heavy_weight_threshold: DEFAULT_HEAVY_WEIGHT_THRESHOLD_KG,
            heavy_increment: DEFAULT_HEAVY_INCREMENT_KG,
            light_increment: DEFAULT_LIGHT_INCREMENT_KG,
        }
    }
}

/// Recovery time model: `base * (1 + min(v/vd, vc) * vw + min(i/id, ic) * iw)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoveryConfig {
    /// Baseline recovery in hours
    pub base_hours: f64,
    /// Volume normalizer
    pub volume_divisor: f64,
    /// Cap on the normalized volume factor
    pub volume_cap: f64,
    /// Weight of the volume factor
    pub volume_weight: f64,
    /// Intensity normalizer
    pub intensity_divisor: f64,
    /// Cap on the normalized intensity factor
    pub intensity_cap: f64,
    /// Weight of the intensity factor
    pub intensity_weight: f64,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            base_hours: DEFAULT_RECOVERY_BASE_HOURS,
            volume_divisor: 1000.0,
            volume_cap: 2.0,
            volume_weight: 0.5,
            intensity_divisor: 100.0,
            intensity_cap: 1.5,
            intensity_weight: 0.3,
        }
    }
}

/// Configuration shared by the calculators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Formula used when none is requested
    pub default_formula: OneRepMaxAlgorithm,
    /// Multiplier applied to working weight during a deload
    pub deload_factor: f64,
    /// Multiplier applied to a one-rep max to obtain the training max
    pub training_max_factor: f64,
    /// Progressive overload increments
    pub progression: ProgressionConfig,
    /// Recovery model weights
    pub recovery: RecoveryConfig,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_formula: OneRepMaxAlgorithm::default(),
            deload_factor: DEFAULT_DELOAD_FACTOR,
            training_max_factor: DEFAULT_TRAINING_MAX_FACTOR,
            progression: ProgressionConfig::default(),
            recovery: RecoveryConfig::default(),
        }
    }
}

impl CalculatorConfig {
    /// Process-wide configuration, loaded once
    ///
    /// Falls back to defaults when the environment holds an invalid override.
    pub fn global() -> &'static Self {
        CALCULATOR_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load calculator config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Build configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the result is invalid
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate factors, increments, and recovery weights
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_unit_factor(self.deload_factor) {
            return Err(ConfigError::ValueOutOfRange(
                "deload_factor must be in (0, 1]",
            ));
        }
        if !is_unit_factor(self.training_max_factor) {
            return Err(ConfigError::ValueOutOfRange(
                "training_max_factor must be in (0, 1]",
            ));
        }

        let progression = &self.progression;
        if !is_positive(progression.heavy_weight_threshold) {
            return Err(ConfigError::ValueOutOfRange(
                "heavy_weight_threshold must be positive",
            ));
        }
        if !is_positive(progression.light_increment) || !is_positive(progression.heavy_increment)
        {
            return Err(ConfigError::ValueOutOfRange(
                "progression increments must be positive",
            ));
        }
        if progression.light_increment > progression.heavy_increment {
            return Err(ConfigError::InvalidRange(
                "light_increment must not exceed heavy_increment",
            ));
        }

        let recovery = &self.recovery;
        if !is_positive(recovery.base_hours)
            || !is_positive(recovery.volume_divisor)
            || !is_positive(recovery.intensity_divisor)
        {
            return Err(ConfigError::ValueOutOfRange(
                "recovery base hours and divisors must be positive",
            ));
        }
        if [
            recovery.volume_cap,
            recovery.volume_weight,
            recovery.intensity_cap,
            recovery.intensity_weight,
        ]
        .iter()
        .any(|value| !value.is_finite() || *value < 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "recovery caps and weights must be non-negative",
            ));
        }

        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("PERIODIZATION_ONE_RM_FORMULA", &mut self.default_formula)?;
        Self::apply_env_var("PERIODIZATION_DELOAD_FACTOR", &mut self.deload_factor)?;
        Self::apply_env_var(
            "PERIODIZATION_TRAINING_MAX_FACTOR",
            &mut self.training_max_factor,
        )?;
        Self::apply_env_var(
            "PERIODIZATION_HEAVY_THRESHOLD_KG",
            &mut self.progression.heavy_weight_threshold,
        )?;
        Ok(self)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_unit_factor(value: f64) -> bool {
    is_positive(value) && value <= 1.0
}
