// ABOUTME: Tests for one-rep-max formulas, rounding, and the percentage table
// ABOUTME: Validates formula values, input rejection, and the Brzycki rep limit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use periodization_core::errors::ErrorCode;
use periodization_intelligence::{estimate_one_rep_max, OneRepMaxAlgorithm};

#[test]
fn test_epley_formula() {
    let raw = OneRepMaxAlgorithm::Epley.estimate(100.0, 10).unwrap();
    assert!((raw - 133.333_333).abs() < 1e-3);
}

#[test]
fn test_brzycki_formula() {
    // 100 / (1.0278 - 0.278) = 133.37
    let raw = OneRepMaxAlgorithm::Brzycki.estimate(100.0, 10).unwrap();
    assert!((raw - 133.369).abs() < 1e-2);
}

#[test]
fn test_lombardi_formula() {
    let raw = OneRepMaxAlgorithm::Lombardi.estimate(100.0, 10).unwrap();
    assert!((raw - 125.892_5).abs() < 1e-3);
}

#[test]
fn test_mayhew_formula() {
    // 10000 / (52.2 + 41.9 * e^-0.55)
    let raw = OneRepMaxAlgorithm::Mayhew.estimate(100.0, 10).unwrap();
    assert!((raw - 130.934).abs() < 0.01);
}

#[test]
fn test_estimate_is_rounded_to_plate_increment() {
    let estimate = estimate_one_rep_max(100.0, 10, OneRepMaxAlgorithm::Epley).unwrap();
    assert!((estimate.estimated_1rm - 132.5).abs() < f64::EPSILON);
    assert_eq!(estimate.formula, OneRepMaxAlgorithm::Epley);

    let remainder = estimate.estimated_1rm % 2.5;
    assert!(remainder.abs() < 1e-9);
}

#[test]
fn test_percentage_table_shape() {
    let estimate = estimate_one_rep_max(100.0, 5, OneRepMaxAlgorithm::Epley).unwrap();
    let keys: Vec<u32> = estimate.percentages.keys().copied().collect();
    assert_eq!(keys, vec![50, 55, 60, 65, 70, 75, 80, 85, 90, 95, 100]);

    // 116.67 rounds to 117.5
    assert!((estimate.estimated_1rm - 117.5).abs() < f64::EPSILON);
    assert_eq!(estimate.load_at(100), Some(117.5));
    for load in estimate.percentages.values() {
        assert!((load % 2.5).abs() < 1e-9);
    }
    assert_eq!(estimate.load_at(42), None);
}

#[test]
fn test_single_rep_approximates_lifted_weight() {
    for algorithm in OneRepMaxAlgorithm::ALL {
        let estimate = estimate_one_rep_max(100.0, 1, algorithm).unwrap();
        assert!(
            (estimate.estimated_1rm - 100.0).abs() <= 12.5,
            "{} gave {}",
            algorithm.name(),
            estimate.estimated_1rm
        );
    }
    let brzycki = estimate_one_rep_max(100.0, 1, OneRepMaxAlgorithm::Brzycki).unwrap();
    assert!((brzycki.estimated_1rm - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_brzycki_rejects_37_reps_and_more() {
    assert!(OneRepMaxAlgorithm::Brzycki.estimate(60.0, 36).is_ok());
    for reps in [37, 40, 100] {
        let error = OneRepMaxAlgorithm::Brzycki.estimate(60.0, reps).unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    }
    // Other formulas stay defined
    assert!(OneRepMaxAlgorithm::Epley.estimate(60.0, 40).is_ok());
}

#[test]
fn test_invalid_inputs_rejected() {
    for algorithm in OneRepMaxAlgorithm::ALL {
        for weight in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let error = algorithm.estimate(weight, 5).unwrap_err();
            assert_eq!(error.code, ErrorCode::InvalidInput);
        }
        let error = algorithm.estimate(100.0, 0).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }
}

#[test]
fn test_algorithm_parsing() {
    assert_eq!("epley".parse::<OneRepMaxAlgorithm>().unwrap(), OneRepMaxAlgorithm::Epley);
    assert_eq!("BRZYCKI".parse::<OneRepMaxAlgorithm>().unwrap(), OneRepMaxAlgorithm::Brzycki);
    assert_eq!(" mayhew ".parse::<OneRepMaxAlgorithm>().unwrap(), OneRepMaxAlgorithm::Mayhew);
    assert!("wathan".parse::<OneRepMaxAlgorithm>().is_err());
    assert_eq!(OneRepMaxAlgorithm::default(), OneRepMaxAlgorithm::Epley);
}

#[test]
fn test_estimate_serializes_formula_name() {
    let estimate = estimate_one_rep_max(80.0, 8, OneRepMaxAlgorithm::Lombardi).unwrap();
    let json = serde_json::to_value(&estimate).unwrap();
    assert_eq!(json["formula"], "lombardi");
    assert!(json["percentages"]["75"].is_number());
}
