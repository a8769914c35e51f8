// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Program catalog commands for periodization-cli
// ABOUTME: Lists programs, optionally by level, and shows a single program

use crate::helpers::display::print_json;
use anyhow::{anyhow, Result};
use periodization_coach::catalog::ProgramCatalog;
use periodization_coach::models::{ExperienceLevel, PeriodizationProgram};
use tracing::info;

/// List programs, filtered by level when given
pub fn list(level: Option<ExperienceLevel>) -> Result<()> {
    let catalog = ProgramCatalog::global();
    let programs: Vec<&PeriodizationProgram> = match level {
        Some(level) => catalog.get_programs_by_level(level),
        None => catalog.programs().iter().collect(),
    };
    info!("Listing {} programs", programs.len());
    print_json(&programs)
}

/// Show the program with `id`
pub fn show(id: &str) -> Result<()> {
    let program = ProgramCatalog::global()
        .get_program_by_id(id)
        .ok_or_else(|| {
            let known: Vec<&str> = ProgramCatalog::global().ids().collect();
            anyhow!("Unknown program '{id}'. Known programs: {}", known.join(", "))
        })?;
    print_json(program)
}
