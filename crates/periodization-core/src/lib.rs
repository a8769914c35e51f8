// ABOUTME: Core types and constants for the periodization training coach
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Periodization Core
//!
//! Foundation crate providing shared types and constants for the periodization
//! coach. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Program identifiers, rounding granularity, and onboarding defaults
//! - **models**: Programs, phases, user profiles, current program state, and exercises

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (programs, phases, profiles, exercises)
pub mod models;
