// ABOUTME: One-repetition maximum estimation from submaximal sets
// ABOUTME: Implements Epley, Brzycki, Lombardi, and Mayhew formulas with a percentage table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::CalculatorConfig;
use crate::rounding::round_to_plate;
use periodization_core::constants::loading::{
    PERCENTAGE_TABLE_END, PERCENTAGE_TABLE_START, PERCENTAGE_TABLE_STEP,
};
use periodization_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Brzycki's denominator reaches zero at 37 reps
const BRZYCKI_REP_LIMIT: u32 = 37;

/// One-rep-max estimation formula
///
/// All formulas extrapolate from a set of `reps` repetitions at `weight`:
///
/// - `Epley`: w x (1 + r/30), the most widely used, slightly generous at low reps
/// - `Brzycki`: w / (1.0278 - 0.0278 x r), accurate below 10 reps, undefined from 37 reps
/// - `Lombardi`: w x r^0.10, conservative at high reps
/// - `Mayhew`: 100w / (52.2 + 41.9 x e^(-0.055r)), validated on bench press
///
/// # Scientific References
///
/// - Epley, B. (1985). "Poundage chart." *Boyd Epley Workout*.
/// - Brzycki, M. (1993). "Strength testing: predicting a one-rep max from reps-to-fatigue." *JOPERD*, 64(1), 88-90.
/// - Mayhew, J.L. et al. (1992). "Relative muscular endurance performance as a predictor of bench press strength." *J Appl Sport Sci Res*, 6(4), 200-206.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OneRepMaxAlgorithm {
    /// Epley formula: w x (1 + r/30)
    #[default]
    Epley,
    /// Brzycki formula: w / (1.0278 - 0.0278 x r)
    Brzycki,
    /// Lombardi formula: w x r^0.10
    Lombardi,
    /// Mayhew formula: 100w / (52.2 + 41.9 x e^(-0.055r))
    Mayhew,
}

impl OneRepMaxAlgorithm {
    /// Every supported formula
    pub const ALL: [Self; 4] = [Self::Epley, Self::Brzycki, Self::Lombardi, Self::Mayhew];

    /// Estimate the raw (unrounded) one-rep max
    ///
    /// # Arguments
    ///
    /// * `weight` - Load lifted, must be positive and finite
    /// * `reps` - Repetitions completed, at least 1
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-positive or non-finite weight or zero reps,
    /// and `ValueOutOfRange` for Brzycki at 37 reps or more
    pub fn estimate(&self, weight: f64, reps: u32) -> AppResult<f64> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Weight must be a positive number, got {weight}"
            )));
        }
        if reps == 0 {
            return Err(AppError::invalid_input("Reps must be at least 1"));
        }

        let r = f64::from(reps);
        let estimate = match self {
            Self::Epley => weight * (1.0 + r / 30.0),
            Self::Brzycki => {
                if reps >= BRZYCKI_REP_LIMIT {
                    return Err(AppError::value_out_of_range(format!(
                        "Brzycki formula is undefined for {reps} reps (limit is {})",
                        BRZYCKI_REP_LIMIT - 1
                    )));
                }
                weight / 0.0278f64.mul_add(-r, 1.0278)
            }
            Self::Lombardi => weight * r.powf(0.10),
            Self::Mayhew => 100.0 * weight / 41.9f64.mul_add((-0.055 * r).exp(), 52.2),
        };

        Ok(estimate)
    }

    /// Algorithm name for logging and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Epley => "epley",
            Self::Brzycki => "brzycki",
            Self::Lombardi => "lombardi",
            Self::Mayhew => "mayhew",
        }
    }

    /// Human-readable formula
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Epley => "weight x (1 + reps / 30)",
            Self::Brzycki => "weight / (1.0278 - 0.0278 x reps)",
            Self::Lombardi => "weight x reps^0.10",
            Self::Mayhew => "100 x weight / (52.2 + 41.9 x e^(-0.055 x reps))",
        }
    }
}

impl FromStr for OneRepMaxAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "epley" => Ok(Self::Epley),
            "brzycki" => Ok(Self::Brzycki),
            "lombardi" => Ok(Self::Lombardi),
            "mayhew" => Ok(Self::Mayhew),
            other => Err(AppError::invalid_input(format!(
                "Unknown one-rep-max formula: '{other}'. Valid options: epley, brzycki, lombardi, mayhew"
            ))),
        }
    }
}

/// Rounded one-rep-max estimate with its loading table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneRepMaxEstimate {
    /// Estimated max rounded to the nearest 2.5
    pub estimated_1rm: f64,
    /// Formula used
    pub formula: OneRepMaxAlgorithm,
    /// Percent of max (50..=100, step 5) to rounded load
    pub percentages: BTreeMap<u32, f64>,
}

impl OneRepMaxEstimate {
    /// Rounded load at `percent` of the estimated max, if tabulated
    #[must_use]
    pub fn load_at(&self, percent: u32) -> Option<f64> {
        self.percentages.get(&percent).copied()
    }
}

/// Estimate a one-rep max and build its percentage table
///
/// # Errors
///
/// Propagates the validation errors of [`OneRepMaxAlgorithm::estimate`]
pub fn estimate_one_rep_max(
    weight: f64,
    reps: u32,
    algorithm: OneRepMaxAlgorithm,
) -> AppResult<OneRepMaxEstimate> {
    let estimated_1rm = round_to_plate(algorithm.estimate(weight, reps)?);

    let percentages = (PERCENTAGE_TABLE_START..=PERCENTAGE_TABLE_END)
        .step_by(PERCENTAGE_TABLE_STEP)
        .map(|percent| {
            (
                percent,
                round_to_plate(estimated_1rm * f64::from(percent) / 100.0),
            )
        })
        .collect();

    Ok(OneRepMaxEstimate {
        estimated_1rm,
        formula: algorithm,
        percentages,
    })
}

/// Estimate a one-rep max with the configured default formula
///
/// # Errors
///
/// Propagates the validation errors of [`OneRepMaxAlgorithm::estimate`]
pub fn estimate_one_rep_max_with_config(
    weight: f64,
    reps: u32,
    config: &CalculatorConfig,
) -> AppResult<OneRepMaxEstimate> {
    estimate_one_rep_max(weight, reps, config.default_formula)
}
