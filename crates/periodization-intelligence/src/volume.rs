// ABOUTME: Training volume arithmetic for a block of identical sets
// ABOUTME: Computes total reps, tonnage, and volume load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Volume summary for `sets x reps @ weight`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeCalculation {
    /// Number of sets
    pub total_sets: u32,
    /// Sets times reps, wide enough for any `u32` pair
    pub total_reps: u64,
    /// Total reps times weight
    pub total_weight: f64,
    /// Alias of `total_weight`
    pub volume_load: f64,
    /// Working weight; a true %1RM needs a known max
    pub average_intensity: f64,
}

/// Compute volume for a block of identical sets
#[must_use]
pub fn compute_volume(sets: u32, reps: u32, weight: f64) -> VolumeCalculation {
    let total_reps = u64::from(sets) * u64::from(reps);
    let total_weight = total_reps as f64 * weight;

    VolumeCalculation {
        total_sets: sets,
        total_reps,
        total_weight,
        volume_load: total_weight,
        average_intensity: weight,
    }
}
