// ABOUTME: Tests for RPE to percentage conversion and nearest-anchor lookup
// ABOUTME: Covers exact anchors, interpolation, out-of-range rejection, and tie-breaking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use periodization_core::errors::ErrorCode;
use periodization_intelligence::{percentage_to_rpe, rpe_to_percentage, RPE_TABLE};

#[test]
fn test_exact_anchor_lookup() {
    let conversion = rpe_to_percentage(8.0).unwrap();
    assert!((conversion.percentage - 86.0).abs() < f64::EPSILON);
    assert_eq!(conversion.description, "Definitivamente mais 2 reps");

    let max = rpe_to_percentage(10.0).unwrap();
    assert!((max.percentage - 100.0).abs() < f64::EPSILON);
    assert_eq!(max.description, "Máximo esforço - nenhuma rep adicional");
}

#[test]
fn test_interpolates_between_anchors() {
    // Halfway between RPE 5 (65%) and RPE 6 (72%)
    let conversion = rpe_to_percentage(5.5).unwrap();
    assert!((conversion.rpe - 5.5).abs() < f64::EPSILON);
    assert!((conversion.percentage - 69.0).abs() < f64::EPSILON);
    assert_eq!(conversion.description, "Aproximadamente 69% do 1RM");

    let conversion = rpe_to_percentage(9.25).unwrap();
    assert!((conversion.percentage - 95.0).abs() < f64::EPSILON);
}

#[test]
fn test_out_of_table_range_is_rejected() {
    for rpe in [4.9, 0.0, -1.0, 10.5, 11.0] {
        let error = rpe_to_percentage(rpe).unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange, "rpe {rpe}");
    }
    let error = rpe_to_percentage(f64::NAN).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_nearest_anchor_for_percentage() {
    assert!((percentage_to_rpe(100.0).rpe - 10.0).abs() < f64::EPSILON);
    assert!((percentage_to_rpe(80.0).rpe - 7.0).abs() < f64::EPSILON);
    assert!((percentage_to_rpe(40.0).rpe - 5.0).abs() < f64::EPSILON);
    assert!((percentage_to_rpe(120.0).rpe - 10.0).abs() < f64::EPSILON);
}

#[test]
fn test_ties_resolve_to_lower_rpe() {
    // 88% sits between 86% (RPE 8) and 90% (RPE 8.5)
    assert!((percentage_to_rpe(88.0).rpe - 8.0).abs() < f64::EPSILON);
    // 95% sits between 93% (RPE 9) and 97% (RPE 9.5)
    assert!((percentage_to_rpe(95.0).rpe - 9.0).abs() < f64::EPSILON);
}

#[test]
fn test_anchor_round_trip() {
    for anchor in &RPE_TABLE {
        let percentage = rpe_to_percentage(anchor.rpe).unwrap().percentage;
        let back = percentage_to_rpe(percentage);
        assert!((back.rpe - anchor.rpe).abs() <= 0.5, "rpe {}", anchor.rpe);
    }
}

#[test]
fn test_table_is_strictly_ordered() {
    for pair in RPE_TABLE.windows(2) {
        assert!(pair[0].rpe > pair[1].rpe);
        assert!(pair[0].percentage > pair[1].percentage);
    }
}
