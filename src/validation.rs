// ABOUTME: Service configuration check against a fixed known-good configuration
// ABOUTME: Compares service, port, and env; mismatches are logged and reported as false
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logging::AppLogger;
use nutrition_core::constants::known_good;
use nutrition_core::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Services the check knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Service {
    /// Developer portal
    Backstage,
    /// Git hosting
    Gitea,
    /// Secrets management
    Infisical,
}

impl Service {
    /// Canonical upper-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Backstage => "BACKSTAGE",
            Self::Gitea => "GITEA",
            Self::Infisical => "INFISICAL",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BACKSTAGE" => Ok(Self::Backstage),
            "GITEA" => Ok(Self::Gitea),
            "INFISICAL" => Ok(Self::Infisical),
            _ => Err(ValidationError::UnknownService { name: s.to_owned() }),
        }
    }
}

/// A service triple to check against the known-good configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCheck {
    /// Service name
    pub service: Service,
    /// Listening port
    pub port: u16,
    /// Runtime environment
    pub env: String,
}

impl ServiceCheck {
    /// Create a check for the given triple
    #[must_use]
    pub fn new(service: Service, port: u16, env: impl Into<String>) -> Self {
        Self {
            service,
            port,
            env: env.into(),
        }
    }

    /// The known-good configuration itself
    #[must_use]
    pub fn known_good() -> Self {
        Self::new(Service::Backstage, known_good::PORT, known_good::ENV)
    }

    /// Compare field by field, stopping at the first mismatch
    ///
    /// # Errors
    ///
    /// Returns the first field that differs from the known-good configuration
    pub fn check(&self) -> Result<(), ValidationError> {
        if self.service.as_str() != known_good::SERVICE {
            return Err(ValidationError::WrongService {
                expected: known_good::SERVICE.to_owned(),
                actual: self.service.to_string(),
            });
        }
        if self.port != known_good::PORT {
            return Err(ValidationError::WrongPort {
                expected: known_good::PORT.to_string(),
                actual: self.port.to_string(),
            });
        }
        if self.env != known_good::ENV {
            return Err(ValidationError::WrongEnv {
                expected: known_good::ENV.to_owned(),
                actual: self.env.clone(),
            });
        }
        Ok(())
    }

    /// Whether this triple matches; a mismatch is logged and yields `false`
    #[must_use]
    pub fn validate(&self) -> bool {
        match self.check() {
            Ok(()) => true,
            Err(error) => {
                AppLogger::log_config_mismatch(self.service.as_str(), &error.to_string());
                false
            }
        }
    }
}
