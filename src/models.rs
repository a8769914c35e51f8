// ABOUTME: Domain models re-exported from periodization-core
// ABOUTME: Programs, phases, athlete profiles, current program state, and exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use periodization_core::models::*;
