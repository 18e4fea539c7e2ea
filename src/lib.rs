// ABOUTME: Main library entry point for the nutrition filter client
// ABOUTME: Filter page view model, nutrition service client, and service configuration check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Filter
//!
//! A headless nutrition filter page. A fixed set of filter controls maps to
//! queries against a nutrition lookup service; the result area shows exactly
//! one of loading, error, results, empty, or the initial prompt.
//!
//! ## Architecture
//!
//! - **External**: `NutritionProvider` seam and the HTTP `NutritionClient`
//! - **View**: view-state with request tickets, plus the text renderer
//! - **Controller**: turns clicks into tagged requests and applies outcomes
//! - **Validation**: service configuration check against a known-good triple
//! - **Config / Logging**: environment-driven settings and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use nutrition_filter::config::ClientConfig;
//! use nutrition_filter::controller::FilterController;
//! use nutrition_filter::errors::AppResult;
//! use nutrition_filter::external::NutritionClient;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let client = NutritionClient::new(ClientConfig::from_env()?)?;
//!     let page = FilterController::new(Arc::new(client));
//!
//!     page.click("high-protein").await?;
//!     page.wait_until_settled().await;
//!     print!("{}", page.render().await);
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Filter page controller
pub mod controller;

/// Nutrition service clients
pub mod external;

/// Structured logging setup and log events
pub mod logging;

/// Service configuration check
pub mod validation;

/// View-state and result rendering
pub mod view;

// Core types live in the foundation crate
pub use nutrition_core::{constants, errors, models};
