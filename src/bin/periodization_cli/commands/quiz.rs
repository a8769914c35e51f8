// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Onboarding quiz commands for periodization-cli
// ABOUTME: Prints the questionnaire and evaluates answer files into recommendations

use crate::helpers::display::print_json;
use anyhow::{Context, Result};
use periodization_coach::config::CoachConfig;
use periodization_coach::quiz::{self, load_answers_file};
use periodization_coach::recommendation::RecommendationEngine;
use std::path::Path;
use tracing::info;

/// Print every question with its options
pub fn questions() -> Result<()> {
    print_json(quiz::questions())
}

/// Evaluate the answers stored at `path`
pub fn evaluate(config: &CoachConfig, path: &Path) -> Result<()> {
    let answers = load_answers_file(path)
        .with_context(|| format!("Failed to load answers from {}", path.display()))?;
    let recommendation = RecommendationEngine::from_config(config)
        .evaluate(answers.as_slice())
        .context("Failed to build a recommendation")?;
    info!(
        "Recommended '{}' for a {} athlete",
        recommendation.evaluation.recommended_program_id, recommendation.evaluation.level
    );
    print_json(&recommendation)
}
