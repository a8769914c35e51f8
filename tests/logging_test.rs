// ABOUTME: Tests for logging configuration from the environment
// ABOUTME: Environment-mutating tests run serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use periodization_coach::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const LOGGING_VARS: [&str; 5] = [
    "LOG_FORMAT",
    "ENVIRONMENT",
    "RUST_LOG",
    "LOG_INCLUDE_LOCATION",
    "SERVICE_NAME",
];

fn clear_logging_vars() {
    for name in LOGGING_VARS {
        env::remove_var(name);
    }
}

#[test]
fn test_defaults() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.service_name, "periodization-coach");
    assert!(!config.include_location);
}

#[test]
fn test_verbose_raises_level() {
    assert_eq!(LoggingConfig::default().verbose().level, "debug");
}

#[test]
#[serial]
fn test_from_env_reads_format_and_level() {
    clear_logging_vars();
    env::set_var("LOG_FORMAT", "json");
    env::set_var("RUST_LOG", "periodization_coach=debug");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    clear_logging_vars();

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, "periodization_coach=debug");
    assert_eq!(config.environment, "production");
    assert!(config.include_location);
}

#[test]
#[serial]
fn test_init_rejects_invalid_filter() {
    let config = LoggingConfig {
        level: "periodization_coach=loudest".into(),
        ..LoggingConfig::default()
    };
    assert!(config.init().is_err());
}

#[test]
#[serial]
fn test_init_tolerates_repeat_initialization() {
    let config = LoggingConfig::default();
    assert!(config.init().is_ok());
    assert!(config.init().is_ok());
}

#[test]
#[serial]
fn test_init_each_format() {
    for format in [LogFormat::Pretty, LogFormat::Compact, LogFormat::Json] {
        let config = LoggingConfig {
            format,
            ..LoggingConfig::default()
        };
        assert!(config.init().is_ok());
    }
}

#[test]
#[serial]
fn test_init_from_env_uses_environment() {
    clear_logging_vars();
    env::set_var("LOG_FORMAT", "pretty");
    let result = periodization_coach::logging::init_from_env();
    clear_logging_vars();
    assert!(result.is_ok());
}
