// ABOUTME: Recovery time estimation from session volume and intensity
// ABOUTME: Applies capped, weighted volume and intensity factors to a 24-hour baseline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{CalculatorConfig, RecoveryConfig};

/// Hours of recovery after a session of `volume` load at `intensity` percent
///
/// `24 * (1 + min(volume/1000, 2) * 0.5 + min(intensity/100, 1.5) * 0.3)`,
/// rounded to the nearest hour.
#[must_use]
pub fn recovery_hours(volume: f64, intensity: f64) -> u32 {
    recovery_hours_with(volume, intensity, &RecoveryConfig::default())
}

/// Recovery hours using the weights of `config`
#[must_use]
pub fn recovery_hours_with_config(volume: f64, intensity: f64, config: &CalculatorConfig) -> u32 {
    recovery_hours_with(volume, intensity, &config.recovery)
}

fn recovery_hours_with(volume: f64, intensity: f64, model: &RecoveryConfig) -> u32 {
    let volume_factor = (volume.max(0.0) / model.volume_divisor).min(model.volume_cap);
    let intensity_factor = (intensity.max(0.0) / model.intensity_divisor).min(model.intensity_cap);

    let multiplier = volume_factor.mul_add(
        model.volume_weight,
        intensity_factor.mul_add(model.intensity_weight, 1.0),
    );

    (model.base_hours * multiplier).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_without_load() {
        assert_eq!(recovery_hours(0.0, 0.0), 24);
    }

    #[test]
    fn test_factors_are_capped_independently() {
        // 24 * (1 + 2*0.5 + 1.5*0.3) = 58.8
        assert_eq!(recovery_hours(50_000.0, 500.0), 59);
        // 24 * (1 + 2*0.5 + 0.8*0.3) = 53.76
        assert_eq!(recovery_hours(50_000.0, 80.0), 54);
    }
}
