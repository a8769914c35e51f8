// ABOUTME: Unified error types re-exported from periodization-core
// ABOUTME: Provides AppError, ErrorCode, and AppResult to the library and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use periodization_core::errors::*;
