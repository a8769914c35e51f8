// ABOUTME: Rate of Perceived Exertion conversion to and from percentage of one-rep max
// ABOUTME: Fixed ten-anchor table with nearest-anchor lookup and linear interpolation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use periodization_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Anchor of the RPE table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RpeAnchor {
    /// RPE value (5-10)
    pub rpe: f64,
    /// Percentage of one-rep max
    pub percentage: f64,
    /// Reps-in-reserve description
    pub description: &'static str,
}

/// Anchors ordered from RPE 10 down to RPE 5
pub const RPE_TABLE: [RpeAnchor; 10] = [
    RpeAnchor {
        rpe: 10.0,
        percentage: 100.0,
        description: "Máximo esforço - nenhuma rep adicional",
    },
    RpeAnchor {
        rpe: 9.5,
        percentage: 97.0,
        description: "Talvez mais meia rep",
    },
    RpeAnchor {
        rpe: 9.0,
        percentage: 93.0,
        description: "Definitivamente mais 1 rep",
    },
    RpeAnchor {
        rpe: 8.5,
        percentage: 90.0,
        description: "Talvez mais 1-2 reps",
    },
    RpeAnchor {
        rpe: 8.0,
        percentage: 86.0,
        description: "Definitivamente mais 2 reps",
    },
    RpeAnchor {
        rpe: 7.5,
        percentage: 83.0,
        description: "Talvez mais 2-3 reps",
    },
    RpeAnchor {
        rpe: 7.0,
        percentage: 79.0,
        description: "Definitivamente mais 3 reps",
    },
    RpeAnchor {
        rpe: 6.5,
        percentage: 76.0,
        description: "Talvez mais 3-4 reps",
    },
    RpeAnchor {
        rpe: 6.0,
        percentage: 72.0,
        description: "Definitivamente mais 4 reps",
    },
    RpeAnchor {
        rpe: 5.0,
        percentage: 65.0,
        description: "Mais 5+ reps possíveis",
    },
];

const RPE_MATCH_TOLERANCE: f64 = 1e-9;

/// Result of an RPE conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpeConversion {
    /// RPE value
    pub rpe: f64,
    /// Percentage of one-rep max (whole percent)
    pub percentage: f64,
    /// Reps-in-reserve description
    pub description: String,
}

impl From<&RpeAnchor> for RpeConversion {
    fn from(anchor: &RpeAnchor) -> Self {
        Self {
            rpe: anchor.rpe,
            percentage: anchor.percentage,
            description: anchor.description.to_owned(),
        }
    }
}

/// Convert an RPE value to a percentage of one-rep max
///
/// Table anchors are returned as-is. Values between anchors are linearly
/// interpolated and rounded to a whole percent.
///
/// # Errors
///
/// Returns `InvalidInput` for a non-finite RPE and `ValueOutOfRange` when the
/// RPE lies outside the table range (5 to 10)
pub fn rpe_to_percentage(rpe: f64) -> AppResult<RpeConversion> {
    if !rpe.is_finite() {
        return Err(AppError::invalid_input(format!(
            "RPE must be a finite number, got {rpe}"
        )));
    }

    if let Some(anchor) = RPE_TABLE
        .iter()
        .find(|anchor| (anchor.rpe - rpe).abs() < RPE_MATCH_TOLERANCE)
    {
        return Ok(anchor.into());
    }

    let lower = RPE_TABLE.iter().find(|anchor| anchor.rpe < rpe);
    let upper = RPE_TABLE.iter().rev().find(|anchor| anchor.rpe > rpe);

    let (Some(lower), Some(upper)) = (lower, upper) else {
        return Err(AppError::value_out_of_range(format!(
            "RPE {rpe} is outside the supported range 5-10"
        )));
    };

    let ratio = (rpe - lower.rpe) / (upper.rpe - lower.rpe);
    let percentage = (upper.percentage - lower.percentage)
        .mul_add(ratio, lower.percentage)
        .round();

    Ok(RpeConversion {
        rpe,
        percentage,
        description: format!("Aproximadamente {percentage}% do 1RM"),
    })
}

/// Find the table anchor closest to a percentage of one-rep max
///
/// Ties between two anchors resolve to the lower RPE.
#[must_use]
pub fn percentage_to_rpe(percentage: f64) -> RpeConversion {
    let lowest = &RPE_TABLE[RPE_TABLE.len() - 1];
    let closest = RPE_TABLE.iter().rev().skip(1).fold(lowest, |closest, anchor| {
        if (anchor.percentage - percentage).abs() < (closest.percentage - percentage).abs() {
            anchor
        } else {
            closest
        }
    });

    closest.into()
}
