// ABOUTME: Main library entry point for the periodization training coach
// ABOUTME: Wires the program catalog, quiz evaluation, recommendations, and calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Periodization Coach
//!
//! Training recommendation engine for strength athletes. An onboarding quiz is
//! evaluated into an experience level and one of four periodization programs,
//! and a profile plus starting program state are built from the answers.
//!
//! ## Architecture
//!
//! - **Catalog**: fixed programs and reference exercises
//! - **Quiz**: questionnaire, answer codes, step flow, and evaluator
//! - **Recommendation**: answers to profile and current program
//! - **Session**: explicit per-session state with named mutations
//! - **Calculators**: strength math from `periodization-intelligence`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use periodization_coach::quiz::{QuestionId, QuizAnswer};
//! use periodization_coach::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let answers = vec![
//!         QuizAnswer::new(QuestionId::Experience, "1-2 anos (Intermediário)"),
//!         QuizAnswer::new(QuestionId::Availability, "5 dias"),
//!     ];
//!     let recommendation = periodization_coach::evaluate(&answers)?;
//!     println!("{}", recommendation.current_program.program_id);
//!     Ok(())
//! }
//! ```

/// Program and exercise catalogs
pub mod catalog;

/// Environment-driven configuration
pub mod config;

/// Unified error handling
pub mod errors;

/// Structured logging setup and domain event helpers
pub mod logging;

/// Domain models
pub mod models;

/// Onboarding questionnaire and evaluator
pub mod quiz;

/// Recommendation orchestrator
pub mod recommendation;

/// Per-session application state
pub mod session;

/// Strength training calculators
pub use periodization_intelligence as calculators;

pub use catalog::{lookup_program, programs_for_level, ExerciseCatalog, ProgramCatalog};
pub use quiz::{evaluate_quiz, AnswerSet, QuizAnswer, QuizEvaluation};
pub use recommendation::{evaluate, Recommendation, RecommendationEngine};
pub use session::{SessionState, View};
