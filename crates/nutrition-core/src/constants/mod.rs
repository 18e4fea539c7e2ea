// ABOUTME: Application-wide constants for the nutrition filter client
// ABOUTME: Service defaults, environment variable names, UI messages, and the known-good service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain.

/// Nutrition service endpoint defaults
pub mod service {
    /// Default base URL of the nutrition lookup service
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
    /// Path of the cluster lookup endpoint
    pub const BY_CLUSTER_PATH: &str = "/foods/by-cluster";
    /// Path of the legacy macro lookup endpoint
    pub const MACRO_PATH: &str = "/api/nutrition";
    /// Default number of results requested per cluster query
    pub const DEFAULT_LIMIT: u32 = 50;
    /// Largest accepted result limit
    pub const MAX_LIMIT: u32 = 500;
    /// Default HTTP timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
    /// Name used when reporting service failures
    pub const SERVICE_NAME: &str = "Nutrition API";
}

/// Environment variable names
pub mod env_config {
    /// Base URL of the nutrition service
    pub const BASE_URL: &str = "NUTRITION_API_BASE_URL";
    /// Result limit for cluster queries
    pub const LIMIT: &str = "NUTRITION_API_LIMIT";
    /// API contract (`cluster` or `macro`)
    pub const CONTRACT: &str = "NUTRITION_API_CONTRACT";
    /// HTTP timeout in seconds
    pub const TIMEOUT_SECS: &str = "NUTRITION_HTTP_TIMEOUT_SECS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

/// Text shown by the result renderer
pub mod messages {
    /// Page title
    pub const TITLE: &str = "Nutrition Filter";
    /// Shown while a request is in flight
    pub const LOADING: &str = "Loading...";
    /// Shown after a successful query with no items
    pub const NO_RESULTS: &str = "No results found";
    /// Shown before any filter has been selected
    pub const SELECT_PROMPT: &str = "Select a nutrition filter to see results";
    /// Heading above the result list
    pub const RESULTS_HEADING: &str = "Results";
    /// Error text for a non-success HTTP status
    pub const FETCH_FAILED: &str = "Failed to fetch data";
    /// Fallback when an error carries no message
    pub const GENERIC_ERROR: &str = "An error occurred";
}

/// Known-good service configuration used by the configuration check
pub mod known_good {
    /// Expected service name
    pub const SERVICE: &str = "BACKSTAGE";
    /// Expected port
    pub const PORT: u16 = 9000;
    /// Expected runtime environment
    pub const ENV: &str = "node";
}

/// Service identity for logs and the HTTP user agent
pub mod service_names {
    /// Binary and user-agent name
    pub const NUTRITION_FILTER: &str = "nutrition-filter";
}
