// ABOUTME: Athlete profile produced once at onboarding completion
// ABOUTME: Holds experience, availability, goals, preferences, and body weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ExperienceLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Training preferences collected during onboarding
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrainingPreferences {
    /// Preferred training split (blank when not answered)
    pub preferred_split: String,
    /// Equipment the athlete has access to
    pub available_equipment: Vec<String>,
    /// Minutes available per session
    pub minutes_per_session: u32,
}

/// Athlete profile
///
/// Created exactly once when onboarding completes and not edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Generated identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Derived experience level
    pub level: ExperienceLevel,
    /// Training experience in months
    pub experience_months: u32,
    /// Training days available per week
    pub weekly_availability: u32,
    /// Goal tags in the order they were selected
    pub goals: Vec<String>,
    /// Split, equipment, and session length preferences
    pub preferences: TrainingPreferences,
    /// Body weight in kg
    pub body_weight_kg: f64,
    /// When the profile was created
    pub created_at: DateTime<Utc>,
}
