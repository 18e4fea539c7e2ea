// ABOUTME: External API client modules (nutrition lookup service)
// ABOUTME: Provides the NutritionProvider seam, the HTTP client, and a mock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients

pub mod nutrition_client;

// Re-export commonly used types
pub use nutrition_client::{
    build_request_url, MockNutritionProvider, MockReply, NutritionClient, NutritionProvider,
};
