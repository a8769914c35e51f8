// ABOUTME: Estimation algorithm module for strength calculations
// ABOUTME: Houses the selectable one-rep-max formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// One-rep-max estimation (Epley, Brzycki, Lombardi, Mayhew)
pub mod one_rep_max;

pub use one_rep_max::{estimate_one_rep_max, OneRepMaxAlgorithm, OneRepMaxEstimate};
