// ABOUTME: Configuration management module for the nutrition filter client
// ABOUTME: Exposes environment-based client settings and shared config enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: client configuration from environment variables
//! - **Types**: `LogLevel` and `Environment` enums shared across modules

/// Environment-driven client configuration
pub mod environment;
/// Core configuration enums
pub mod types;

pub use environment::ClientConfig;
pub use types::{Environment, LogLevel};
