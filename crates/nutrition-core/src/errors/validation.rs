// ABOUTME: Error types for the service configuration check
// ABOUTME: Describes which field of a service triple failed to match the known-good values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Validation Error Types
//!
//! - `ValidationError` - mismatches found while comparing a service triple
//! - Conversion to `AppError` for callers that want to propagate instead of degrade

use std::error::Error;
use std::fmt;

use super::{AppError, ErrorCode};

/// Mismatch between a service configuration and the known-good configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Service name differs from the expected service
    WrongService {
        /// Expected service name
        expected: String,
        /// Service name that was checked
        actual: String,
    },
    /// Port differs from the expected port
    WrongPort {
        /// Expected port
        expected: String,
        /// Port that was checked
        actual: String,
    },
    /// Runtime environment differs from the expected environment
    WrongEnv {
        /// Expected environment
        expected: String,
        /// Environment that was checked
        actual: String,
    },
    /// Service name is not one of the supported services
    UnknownService {
        /// Name that failed to parse
        name: String,
    },
}

impl ValidationError {
    /// Short diagnostic label for the failed field
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::WrongService { .. } => "wrong service",
            Self::WrongPort { .. } => "wrong port number",
            Self::WrongEnv { .. } => "wrong env",
            Self::UnknownService { .. } => "unknown service",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongService { expected, actual }
            | Self::WrongPort { expected, actual }
            | Self::WrongEnv { expected, actual } => {
                write!(f, "{} (expected '{expected}', got '{actual}')", self.label())
            }
            Self::UnknownService { name } => {
                write!(
                    f,
                    "unknown service '{name}' (expected BACKSTAGE, GITEA or INFISICAL)"
                )
            }
        }
    }
}

impl Error for ValidationError {}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let code = match error {
            ValidationError::UnknownService { .. } => ErrorCode::InvalidInput,
            _ => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
