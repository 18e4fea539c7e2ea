// ABOUTME: Core types and constants for the nutrition filter client
// ABOUTME: Foundation crate with error handling, nutrition models, and filter tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Core
//!
//! Foundation crate providing shared types and constants for the nutrition
//! filter client. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ValidationError`
//! - **constants**: Service defaults, filter tables, and the known-good service configuration
//! - **models**: Filter options, nutrition items, and API response envelopes

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`FilterOption`, `NutritionItem`, `ClusterResponse`, etc.)
pub mod models;
