// ABOUTME: Training calculation library for periodized strength programs
// ABOUTME: One-rep-max estimation, RPE conversion, volume, progression, recovery, and strength standards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Periodization Intelligence
//!
//! Pure, deterministic calculators used by the onboarding engine and exposed
//! directly to presentation views. Every fallible calculator returns
//! [`AppResult`](periodization_core::errors::AppResult) so numeric edge cases
//! surface as explicit errors instead of non-finite values.

/// Estimation algorithms (one-rep max formulas)
pub mod algorithms;
/// Calculator configuration (factors, increments, recovery weights)
pub mod config;
/// Progressive overload, phase progression, deload, and training max
pub mod progression;
/// Recovery time estimation
pub mod recovery;
/// Plate-increment rounding helpers
pub mod rounding;
/// RPE to %1RM conversion table
pub mod rpe;
/// Bodyweight-relative strength standards
pub mod strength;
/// Training volume arithmetic
pub mod volume;

pub use algorithms::one_rep_max::{estimate_one_rep_max, OneRepMaxAlgorithm, OneRepMaxEstimate};
pub use config::{CalculatorConfig, ConfigError};
pub use progression::{
    deload_weight, next_progressive_weight, phase_intensity_at, phase_volume_at, training_max,
};
pub use recovery::recovery_hours;
pub use rounding::{round_to_increment, round_to_plate};
pub use rpe::{percentage_to_rpe, rpe_to_percentage, RpeAnchor, RpeConversion, RPE_TABLE};
pub use strength::{classify_strength_level, LiftType, StrengthLevel, StrengthStandards};
pub use volume::{compute_volume, VolumeCalculation};
