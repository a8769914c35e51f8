// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Strength calculator commands for periodization-cli
// ABOUTME: Wraps the calculation library and prints each result as JSON

use crate::helpers::display::print_json;
use anyhow::{bail, Result};
use periodization_coach::logging::AppLogger;
use periodization_intelligence::config::CalculatorConfig;
use periodization_intelligence::progression::{
    deload_weight_with_config, next_progressive_weight_with_config, training_max_with_config,
};
use periodization_intelligence::recovery::recovery_hours_with_config;
use periodization_intelligence::{
    classify_strength_level, compute_volume, deload_weight, estimate_one_rep_max,
    percentage_to_rpe, rpe_to_percentage, training_max as scaled_training_max, LiftType,
    OneRepMaxAlgorithm,
};
use serde_json::json;

/// One-rep max estimate and percentage table
pub fn one_rm(weight: f64, reps: u32, formula: Option<OneRepMaxAlgorithm>) -> Result<()> {
    let algorithm = formula.unwrap_or(CalculatorConfig::global().default_formula);
    let estimate = estimate_one_rep_max(weight, reps, algorithm);
    AppLogger::log_calculator_call("one_rm", estimate.is_ok());
    print_json(&estimate?)
}

/// RPE to percentage, or percentage to RPE
pub fn rpe(rpe: Option<f64>, percentage: Option<f64>) -> Result<()> {
    match (rpe, percentage) {
        (Some(rpe), _) => {
            let conversion = rpe_to_percentage(rpe);
            AppLogger::log_calculator_call("rpe_to_percentage", conversion.is_ok());
            print_json(&conversion?)
        }
        (None, Some(percentage)) => {
            AppLogger::log_calculator_call("percentage_to_rpe", true);
            print_json(&percentage_to_rpe(percentage))
        }
        (None, None) => bail!("Provide --rpe or --percentage"),
    }
}

/// Volume of a set scheme
pub fn volume(sets: u32, reps: u32, weight: f64) -> Result<()> {
    AppLogger::log_calculator_call("volume", true);
    print_json(&compute_volume(sets, reps, weight))
}

/// Strength tier for a lift
pub fn strength(lift: LiftType, weight: f64, body_weight: f64) -> Result<()> {
    let level = classify_strength_level(lift, weight, body_weight);
    AppLogger::log_calculator_call("strength", level.is_ok());
    let level = level?;
    print_json(&json!({
        "lift": lift,
        "ratio": weight / body_weight,
        "level": level,
        "label": level.label(),
    }))
}

/// Deload load
pub fn deload(weight: f64, factor: Option<f64>) -> Result<()> {
    let config = CalculatorConfig::global();
    let deloaded = factor.map_or_else(
        || deload_weight_with_config(weight, config),
        |factor| deload_weight(weight, factor),
    );
    AppLogger::log_calculator_call("deload", true);
    print_json(&json!({ "weight": weight, "deload_weight": deloaded }))
}

/// Training max
pub fn training_max(one_rm: f64, factor: Option<f64>) -> Result<()> {
    let config = CalculatorConfig::global();
    let max = factor.map_or_else(
        || training_max_with_config(one_rm, config),
        |factor| scaled_training_max(one_rm, factor),
    );
    AppLogger::log_calculator_call("training_max", true);
    print_json(&json!({ "one_rm": one_rm, "training_max": max }))
}

/// Recovery hours
pub fn recovery(volume: f64, intensity: f64) -> Result<()> {
    let hours = recovery_hours_with_config(volume, intensity, CalculatorConfig::global());
    AppLogger::log_calculator_call("recovery", true);
    print_json(&json!({ "volume": volume, "intensity": intensity, "recovery_hours": hours }))
}

/// Next progressive weight
pub fn next_weight(weight: f64, reps: u32, target_reps: u32) -> Result<()> {
    let next = next_progressive_weight_with_config(
        weight,
        reps,
        target_reps,
        CalculatorConfig::global(),
    );
    AppLogger::log_calculator_call("next_weight", true);
    print_json(&json!({
        "current_weight": weight,
        "reps_achieved": reps,
        "target_reps": target_reps,
        "next_weight": next,
    }))
}
