// ABOUTME: Read-only catalogs of periodization programs and reference exercises
// ABOUTME: Validates seed data once and serves lookups by id, level, and muscle group
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Program and exercise catalogs.
//!
//! Both catalogs are process-wide immutable data shared by every session. The
//! global instances are built lazily on first access.

/// Reference exercise library
pub mod exercises;
mod programs;

pub use exercises::ExerciseCatalog;

use periodization_core::errors::{AppError, AppResult};
use periodization_core::models::{ExperienceLevel, PeriodizationProgram, ProgramDraft};
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::error;

static PROGRAM_CATALOG: OnceLock<ProgramCatalog> = OnceLock::new();

/// Ordered registry of periodization programs
#[derive(Debug, Clone, Default)]
pub struct ProgramCatalog {
    programs: Vec<PeriodizationProgram>,
}

impl ProgramCatalog {
    /// Validate drafts into a catalog, preserving their order
    ///
    /// # Errors
    ///
    /// Returns the first program validation error, or `InvalidInput` for a
    /// duplicated program id
    pub fn from_drafts(drafts: Vec<ProgramDraft>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        let mut programs = Vec::with_capacity(drafts.len());

        for draft in drafts {
            if !seen.insert(draft.id.clone()) {
                return Err(AppError::invalid_input(format!(
                    "Duplicate program id '{}'",
                    draft.id
                )));
            }
            programs.push(PeriodizationProgram::new(draft)?);
        }

        Ok(Self { programs })
    }

    /// The four seeded programs
    ///
    /// # Errors
    ///
    /// Returns an error if the seed data violates a program invariant
    pub fn seeded() -> AppResult<Self> {
        Self::from_drafts(programs::seed_drafts())
    }

    /// Process-wide catalog
    ///
    /// Invalid seed data is logged and leaves the catalog empty, so every lookup
    /// misses and callers report the mismatch.
    pub fn global() -> &'static Self {
        PROGRAM_CATALOG.get_or_init(|| {
            Self::seeded().unwrap_or_else(|e| {
                error!("Program catalog seed data is invalid: {e}");
                Self::default()
            })
        })
    }

    /// All programs in catalog order
    #[must_use]
    pub fn programs(&self) -> &[PeriodizationProgram] {
        &self.programs
    }

    /// Program ids in catalog order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.programs.iter().map(|program| program.id.as_str())
    }

    /// Look up a program by id
    #[must_use]
    pub fn get_program_by_id(&self, id: &str) -> Option<&PeriodizationProgram> {
        self.programs.iter().find(|program| program.id == id)
    }

    /// Programs recommended for a level, in catalog order (possibly empty)
    #[must_use]
    pub fn get_programs_by_level(&self, level: ExperienceLevel) -> Vec<&PeriodizationProgram> {
        self.programs
            .iter()
            .filter(|program| program.is_recommended_for(level))
            .collect()
    }

    /// Number of programs
    #[must_use]
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    /// Whether the catalog has no programs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

/// Look up a program in the global catalog
#[must_use]
pub fn lookup_program(id: &str) -> Option<&'static PeriodizationProgram> {
    ProgramCatalog::global().get_program_by_id(id)
}

/// Programs of the global catalog recommended for a level
#[must_use]
pub fn programs_for_level(level: ExperienceLevel) -> Vec<&'static PeriodizationProgram> {
    ProgramCatalog::global().get_programs_by_level(level)
}
