// ABOUTME: Environment-based configuration for the nutrition service client
// ABOUTME: Parses base URL, result limit, contract, and request timeout from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Client configuration is environment-only; CLI flags override individual
//! fields after loading. `LOG_LEVEL` and `ENVIRONMENT` belong to
//! [`crate::logging::LoggingConfig`].

use nutrition_core::constants::{env_config, service};
use nutrition_core::errors::{AppError, AppResult};
use nutrition_core::models::ApiContract;
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Settings for talking to the nutrition lookup service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL (scheme, host and optional port), without a trailing slash
    pub base_url: String,
    /// Result limit sent with cluster queries
    pub limit: u32,
    /// Which API contract to speak
    pub contract: ApiContract,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: service::DEFAULT_BASE_URL.to_owned(),
            limit: service::DEFAULT_LIMIT,
            contract: ApiContract::default(),
            timeout: Duration::from_secs(service::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed
    pub fn from_vars<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(env_config::BASE_URL) {
            config.base_url = parse_base_url(&raw)?;
        }
        if let Some(raw) = lookup(env_config::LIMIT) {
            config.limit = validate_limit(parse_number(env_config::LIMIT, &raw)?)?;
        }
        if let Some(raw) = lookup(env_config::CONTRACT) {
            config.contract = ApiContract::from_str_or_default(&raw);
        }
        if let Some(raw) = lookup(env_config::TIMEOUT_SECS) {
            let secs: u64 = parse_number(env_config::TIMEOUT_SECS, &raw)?;
            if secs == 0 {
                return Err(AppError::config(format!(
                    "{} must be greater than zero",
                    env_config::TIMEOUT_SECS
                )));
            }
            config.timeout = Duration::from_secs(secs);
        }

        debug!(
            base_url = %config.base_url,
            limit = config.limit,
            contract = %config.contract,
            timeout_secs = config.timeout.as_secs(),
            "Client configuration loaded"
        );
        Ok(config)
    }

    /// Replace the base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not an absolute http(s) URL
    pub fn with_base_url(mut self, raw: &str) -> AppResult<Self> {
        self.base_url = parse_base_url(raw)?;
        Ok(self)
    }

    /// Replace the result limit
    ///
    /// # Errors
    ///
    /// Returns an error if the limit is zero or above the maximum
    pub fn with_limit(mut self, limit: u32) -> AppResult<Self> {
        self.limit = validate_limit(limit)?;
        Ok(self)
    }

    /// Replace the API contract
    #[must_use]
    pub const fn with_contract(mut self, contract: ApiContract) -> Self {
        self.contract = contract;
        self
    }
}

fn parse_base_url(raw: &str) -> AppResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed)
        .map_err(|e| AppError::config(format!("Invalid base URL '{raw}': {e}")).with_source(e))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_owned()),
        other => Err(AppError::config(format!(
            "Unsupported URL scheme '{other}' in base URL '{raw}'"
        ))),
    }
}

fn parse_number<T>(key: &str, raw: &str) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|e| AppError::config(format!("Invalid value '{raw}' for {key}: {e}")))
}

fn validate_limit(limit: u32) -> AppResult<u32> {
    if limit == 0 || limit > service::MAX_LIMIT {
        return Err(AppError::out_of_range(format!(
            "Result limit must be between 1 and {}",
            service::MAX_LIMIT
        )));
    }
    Ok(limit)
}
