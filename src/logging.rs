// ABOUTME: Logging configuration and structured logging setup for the nutrition filter client
// ABOUTME: Configures log levels, formatters, and output destinations; logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Rendered screens are written to stdout, so every log layer writes to
//! stderr.

use crate::config::types::{Environment, LogLevel};
use anyhow::{anyhow, Result};
use nutrition_core::constants::{env_config, service_names};
use std::env;
use std::io;
use tracing::{debug, info, warn};
use tracing_subscriber::{
    filter::Directive,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for this crate
    pub level: LogLevel,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for log shipping
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact single-line format (default for the CLI)
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            format: LogFormat::Compact,
            include_location: false,
            include_spans: false,
            service_name: service_names::NUTRITION_FILTER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::Development,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let level = env::var(env_config::LOG_LEVEL)
            .map_or(defaults.level, |raw| LogLevel::from_str_or_default(&raw));
        let format = env::var("LOG_FORMAT")
            .map_or(defaults.format, |raw| LogFormat::from_str_or_default(&raw));
        let environment = env::var(env_config::ENVIRONMENT)
            .map_or(defaults.environment, |raw| {
                Environment::from_str_or_default(&raw)
            });

        Self {
            level,
            format,
            include_location: environment.is_production()
                || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::NUTRITION_FILTER.into()),
            environment,
            ..defaults
        }
    }

    /// Override the level (used by `--verbose`)
    #[must_use]
    pub const fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Build the env filter: `RUST_LOG` if set, otherwise our level, plus noise reduction
    fn env_filter(&self) -> EnvFilter {
        let base = env::var("RUST_LOG").map_or_else(
            |_| EnvFilter::new(format!("warn,nutrition_filter={}", self.level)),
            EnvFilter::new,
        );

        ["hyper=warn", "hyper_util=warn", "reqwest=warn"]
            .into_iter()
            .filter_map(|directive| directive.parse::<Directive>().ok())
            .fold(base, EnvFilter::add_directive)
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .with_span_events(span_events),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .with_span_events(span_events),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr)
                        .with_span_events(FmtSpan::NONE),
                )
                .try_init(),
        };
        installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Application-specific structured log events
pub struct AppLogger;

impl AppLogger {
    /// A filter was clicked and a request issued
    pub fn log_query_started(filter_id: &str, ticket: u64, url: &str) {
        info!(
            filter.id = %filter_id,
            request.ticket = ticket,
            http.url = %url,
            "Nutrition query started"
        );
    }

    /// The nutrition service answered
    pub fn log_http_response(url: &str, status: u16, duration_ms: u64) {
        debug!(
            http.url = %url,
            http.status = status,
            http.duration_ms = duration_ms,
            "Nutrition service responded"
        );
    }

    /// A response was applied to view-state
    pub fn log_query_applied(filter_id: &str, ticket: u64, success: bool, items: usize) {
        info!(
            filter.id = %filter_id,
            request.ticket = ticket,
            query.success = success,
            query.items = items,
            "Nutrition query settled"
        );
    }

    /// A response arrived after a newer request was issued and was dropped
    pub fn log_stale_response(filter_id: &str, ticket: u64, latest: u64) {
        debug!(
            filter.id = %filter_id,
            request.ticket = ticket,
            request.latest = latest,
            "Discarding stale nutrition response"
        );
    }

    /// The service configuration check found a mismatch
    pub fn log_config_mismatch(service: &str, diagnostic: &str) {
        warn!(
            check.service = %service,
            check.diagnostic = %diagnostic,
            "Service configuration check failed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str_or_default("other"), LogFormat::Compact);
    }

    #[test]
    fn test_default_config_is_quiet() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, LogLevel::Warn);
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.service_name, "nutrition-filter");

        let verbose = config.with_level(LogLevel::Debug);
        assert_eq!(verbose.level, LogLevel::Debug);
    }

    #[test]
    fn test_pretty_format_installs_subscriber() {
        let config = LoggingConfig {
            format: LogFormat::Pretty,
            include_spans: true,
            ..LoggingConfig::default()
        };
        assert!(config.init().is_ok());
    }
}
