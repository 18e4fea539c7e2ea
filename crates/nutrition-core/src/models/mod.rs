// ABOUTME: Data models shared by the client, view, and CLI
// ABOUTME: Re-exports filter and nutrition model types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Filter options and API contract selection
pub mod filter;

/// Nutrition items and response envelopes
pub mod nutrition;

pub use filter::{ApiContract, FilterOption, CLUSTER_FILTERS, MACRO_FILTERS};
pub use nutrition::{ClusterResponse, ClusterSummary, MacroItem, NutritionItem, NutritionResults};
