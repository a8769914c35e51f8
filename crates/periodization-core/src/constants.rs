// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Program identifiers, plate rounding, intensity bounds, and onboarding defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than a single flat list.

/// Identifiers of the seeded periodization programs
pub mod program_ids {
    /// Traditional linear periodization
    pub const LINEAR_BASIC: &str = "linear-basic";
    /// Daily undulating periodization
    pub const UNDULATING_DUP: &str = "undulating-dup";
    /// Sequential block periodization
    pub const BLOCK_CONJUGATE: &str = "block-conjugate";
    /// Westside-style conjugate method
    pub const CONJUGATE_WESTSIDE: &str = "conjugate-westside";

    /// All seeded ids in catalog order
    pub const ALL: [&str; 4] = [
        LINEAR_BASIC,
        UNDULATING_DUP,
        BLOCK_CONJUGATE,
        CONJUGATE_WESTSIDE,
    ];
}

/// Load rounding and intensity bounds
pub mod loading {
    /// Smallest practical jump in bar weight (kg), two 1.25 kg plates
    pub const PLATE_INCREMENT_KG: f64 = 2.5;
    /// Upper bound for a phase intensity (% of 1RM); supramaximal work tops out here
    pub const MAX_INTENSITY_PERCENT: f64 = 105.0;
    /// Lowest percentage row of the 1RM percentage table
    pub const PERCENTAGE_TABLE_START: u32 = 50;
    /// Highest percentage row of the 1RM percentage table
    pub const PERCENTAGE_TABLE_END: u32 = 100;
    /// Step between percentage rows
    pub const PERCENTAGE_TABLE_STEP: usize = 5;
}

/// Fallback values used when building a profile from a partial quiz
pub mod onboarding {
    /// Display name used when the name answer is absent or blank
    pub const DEFAULT_DISPLAY_NAME: &str = "Usuário";
    /// Body weight (kg) used when the body-weight answer is absent
    pub const DEFAULT_BODY_WEIGHT_KG: f64 = 70.0;
    /// Minutes per session when the session-duration answer is unmatched
    pub const DEFAULT_SESSION_MINUTES: u32 = 60;
    /// Experience in months when the experience answer is unmatched
    pub const DEFAULT_EXPERIENCE_MONTHS: u32 = 6;
    /// Training days per week when the availability answer is unmatched
    pub const DEFAULT_WEEKLY_DAYS: u32 = 3;
    /// Minimum accepted body weight answer (kg)
    pub const BODY_WEIGHT_MIN_KG: f64 = 40.0;
    /// Maximum accepted body weight answer (kg)
    pub const BODY_WEIGHT_MAX_KG: f64 = 150.0;
}

/// Service identity used in logs
pub mod service_names {
    /// CLI / library service name
    pub const PERIODIZATION_COACH: &str = "periodization-coach";
}
