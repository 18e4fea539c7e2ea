// ABOUTME: Tests for loading client configuration from process environment variables
// ABOUTME: Serialized because they mutate the shared process environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrition_filter::config::{ClientConfig, LogLevel};
use nutrition_filter::logging::LoggingConfig;
use nutrition_filter::constants::env_config;
use nutrition_filter::errors::ErrorCode;
use nutrition_filter::models::ApiContract;
use serial_test::serial;
use std::env;
use std::time::Duration;

const ALL_VARS: [&str; 6] = [
    env_config::BASE_URL,
    env_config::LIMIT,
    env_config::CONTRACT,
    env_config::TIMEOUT_SECS,
    env_config::ENVIRONMENT,
    env_config::LOG_LEVEL,
];

fn clear_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = ClientConfig::from_env().unwrap();

    assert_eq!(config.base_url, "http://localhost:8000");
    assert_eq!(config.limit, 50);
    assert_eq!(config.contract, ApiContract::Cluster);
    assert_eq!(config.timeout, Duration::from_secs(10));
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(env_config::BASE_URL, "https://nutrition.example.com:8443/");
    env::set_var(env_config::LIMIT, "25");
    env::set_var(env_config::CONTRACT, "legacy");
    env::set_var(env_config::TIMEOUT_SECS, "3");
    env::set_var(env_config::ENVIRONMENT, "production");
    env::set_var(env_config::LOG_LEVEL, "debug");

    let config = ClientConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.base_url, "https://nutrition.example.com:8443");
    assert_eq!(config.limit, 25);
    assert_eq!(config.contract, ApiContract::Macro);
    assert_eq!(config.timeout, Duration::from_secs(3));
}

#[test]
#[serial]
fn test_log_settings_come_from_logging_config_only() {
    clear_env();
    let quiet = LoggingConfig::from_env();

    env::set_var(env_config::LOG_LEVEL, "debug");
    env::set_var(env_config::ENVIRONMENT, "production");
    let verbose = LoggingConfig::from_env();
    clear_env();

    assert_eq!(quiet.level, LogLevel::Warn);
    assert!(!quiet.environment.is_production());
    assert_eq!(verbose.level, LogLevel::Debug);
    assert!(verbose.environment.is_production());
    assert!(verbose.include_location);
}

#[test]
#[serial]
fn test_limit_out_of_range_is_rejected() {
    clear_env();
    env::set_var(env_config::LIMIT, "0");
    let zero = ClientConfig::from_env().unwrap_err();

    env::set_var(env_config::LIMIT, "501");
    let too_many = ClientConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(zero.code, ErrorCode::ValueOutOfRange);
    assert_eq!(too_many.code, ErrorCode::ValueOutOfRange);
}

#[test]
#[serial]
fn test_unparseable_values_are_config_errors() {
    clear_env();
    env::set_var(env_config::LIMIT, "fifty");
    let bad_limit = ClientConfig::from_env().unwrap_err();
    clear_env();

    env::set_var(env_config::BASE_URL, "ftp://files.example.com");
    let bad_scheme = ClientConfig::from_env().unwrap_err();
    clear_env();

    env::set_var(env_config::TIMEOUT_SECS, "0");
    let zero_timeout = ClientConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(bad_limit.code, ErrorCode::ConfigError);
    assert_eq!(bad_scheme.code, ErrorCode::ConfigError);
    assert_eq!(zero_timeout.code, ErrorCode::ConfigError);
}
