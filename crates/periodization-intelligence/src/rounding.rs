// ABOUTME: Rounding helpers for loads expressed in plate increments
// ABOUTME: Snaps computed weights to the nearest loadable multiple
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use periodization_core::constants::loading::PLATE_INCREMENT_KG;

/// Round `value` to the nearest multiple of `increment`
///
/// Non-positive or non-finite increments leave the value untouched.
#[must_use]
pub fn round_to_increment(value: f64, increment: f64) -> f64 {
    if !increment.is_finite() || increment <= 0.0 {
        return value;
    }
    (value / increment).round() * increment
}

/// Round to the nearest 2.5 kg plate increment
#[must_use]
pub fn round_to_plate(value: f64) -> f64 {
    round_to_increment(value, PLATE_INCREMENT_KG)
}
