// ABOUTME: Load progression calculators for periodized programs
// ABOUTME: Progressive overload, week-by-week phase interpolation, deload, and training max
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::calculator::{DEFAULT_DELOAD_FACTOR, DEFAULT_TRAINING_MAX_FACTOR};
use crate::config::{CalculatorConfig, ProgressionConfig};
use crate::rounding::round_to_plate;
use periodization_core::errors::{AppError, AppResult};

/// Next working weight after a set
///
/// Hitting the rep target adds 5 kg at 100 kg and above, 2.5 kg below.
/// Missing it leaves the weight unchanged.
#[must_use]
pub fn next_progressive_weight(current_weight: f64, reps_achieved: u32, target_reps: u32) -> f64 {
    next_weight_with(
        current_weight,
        reps_achieved,
        target_reps,
        &ProgressionConfig::default(),
    )
}

/// [`next_progressive_weight`] with configured threshold and increments
#[must_use]
pub fn next_progressive_weight_with_config(
    current_weight: f64,
    reps_achieved: u32,
    target_reps: u32,
    config: &CalculatorConfig,
) -> f64 {
    next_weight_with(current_weight, reps_achieved, target_reps, &config.progression)
}

fn next_weight_with(
    current_weight: f64,
    reps_achieved: u32,
    target_reps: u32,
    progression: &ProgressionConfig,
) -> f64 {
    if reps_achieved < target_reps {
        return current_weight;
    }
    let increment = if current_weight >= progression.heavy_weight_threshold {
        progression.heavy_increment
    } else {
        progression.light_increment
    };
    current_weight + increment
}

/// Intensity prescribed at `current_week` of a phase moving from `start` to `end`
///
/// Linear in `current_week / total_weeks`, rounded to a whole percent.
///
/// # Errors
///
/// Returns `InvalidInput` if `total_weeks` is zero
pub fn phase_intensity_at(
    current_week: u32,
    total_weeks: u32,
    start_percent: f64,
    end_percent: f64,
) -> AppResult<f64> {
    interpolate_weekly(current_week, total_weeks, start_percent, end_percent)
}

/// Volume prescribed at `current_week`, the analogue of [`phase_intensity_at`]
///
/// # Errors
///
/// Returns `InvalidInput` if `total_weeks` is zero
pub fn phase_volume_at(
    current_week: u32,
    total_weeks: u32,
    start_volume: f64,
    end_volume: f64,
) -> AppResult<f64> {
    interpolate_weekly(current_week, total_weeks, start_volume, end_volume)
}

fn interpolate_weekly(current_week: u32, total_weeks: u32, start: f64, end: f64) -> AppResult<f64> {
    if total_weeks == 0 {
        return Err(AppError::invalid_input(
            "Total weeks must be greater than zero",
        ));
    }
    let ratio = f64::from(current_week) / f64::from(total_weeks);
    Ok((end - start).mul_add(ratio, start).round())
}

/// Deload load: `current_weight * factor`, rounded to 2.5
#[must_use]
pub fn deload_weight(current_weight: f64, factor: f64) -> f64 {
    round_to_plate(current_weight * factor)
}

/// Deload with the default factor (0.8)
#[must_use]
pub fn default_deload_weight(current_weight: f64) -> f64 {
    deload_weight(current_weight, DEFAULT_DELOAD_FACTOR)
}

/// Deload with the configured factor
#[must_use]
pub fn deload_weight_with_config(current_weight: f64, config: &CalculatorConfig) -> f64 {
    deload_weight(current_weight, config.deload_factor)
}

/// Training max: `one_rm * factor`, rounded to 2.5
#[must_use]
pub fn training_max(one_rm: f64, factor: f64) -> f64 {
    round_to_plate(one_rm * factor)
}

/// Training max with the default factor (0.9)
#[must_use]
pub fn default_training_max(one_rm: f64) -> f64 {
    training_max(one_rm, DEFAULT_TRAINING_MAX_FACTOR)
}

/// Training max with the configured factor
#[must_use]
pub fn training_max_with_config(one_rm: f64, config: &CalculatorConfig) -> f64 {
    training_max(one_rm, config.training_max_factor)
}
