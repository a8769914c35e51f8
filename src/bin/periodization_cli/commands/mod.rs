// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for periodization-cli
// ABOUTME: Provides catalog, quiz, and calculator commands

pub mod calc;
pub mod exercises;
pub mod programs;
pub mod quiz;
