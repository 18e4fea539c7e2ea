// ABOUTME: Static filter option tables and the API contract they belong to
// ABOUTME: FilterOption maps a UI label to a query parameter/value pair
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use std::fmt;

/// A predefined filter control.
///
/// `id` drives selection highlighting; `param` and `value` are serialized into
/// the request query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FilterOption {
    /// Stable identifier used for selection state
    pub id: &'static str,
    /// Label shown on the control
    pub label: &'static str,
    /// Query parameter name
    pub param: &'static str,
    /// Query parameter value
    pub value: &'static str,
}

impl FilterOption {
    const fn new(
        id: &'static str,
        label: &'static str,
        param: &'static str,
        value: &'static str,
    ) -> Self {
        Self {
            id,
            label,
            param,
            value,
        }
    }
}

/// Filters for the cluster contract. `value` is the cluster name sent to the service.
pub const CLUSTER_FILTERS: [FilterOption; 6] = [
    FilterOption::new("high-protein", "High Protein", "protein", "High Protein"),
    FilterOption::new("low-calorie", "Low Calorie", "calories", "Low Calorie"),
    FilterOption::new("high-fat", "High Fat", "fat", "High Fat"),
    FilterOption::new("high-carbs", "High Carbs", "carbs", "High Carb"),
    FilterOption::new("high-fiber", "High Fiber", "fiber", "High Fiber"),
    FilterOption::new("high-sodium", "High Sodium", "sodium", "High Sodium"),
];

/// Filters for the legacy macro contract: `<param>=<high|low>`.
pub const MACRO_FILTERS: [FilterOption; 6] = [
    FilterOption::new("high-protein", "High Protein", "protein", "high"),
    FilterOption::new("low-protein", "Low Protein", "protein", "low"),
    FilterOption::new("high-fat", "High Fat", "fat", "high"),
    FilterOption::new("low-fat", "Low Fat", "fat", "low"),
    FilterOption::new("high-carbs", "High Carbs", "carbs", "high"),
    FilterOption::new("low-carbs", "Low Carbs", "carbs", "low"),
];

/// Which nutrition service contract the client speaks.
///
/// `Cluster` is canonical. `Macro` exists for the older `/api/nutrition`
/// endpoint and is only used when selected explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiContract {
    /// `GET /foods/by-cluster?cluster_name=..&limit=..`
    #[default]
    Cluster,
    /// `GET /api/nutrition?<param>=<value>`
    Macro,
}

impl ApiContract {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "macro" | "legacy" => Self::Macro,
            _ => Self::Cluster,
        }
    }

    /// Filter table for this contract
    #[must_use]
    pub const fn filters(self) -> &'static [FilterOption] {
        match self {
            Self::Cluster => &CLUSTER_FILTERS,
            Self::Macro => &MACRO_FILTERS,
        }
    }

    /// Look up a filter by id
    #[must_use]
    pub fn find_filter(self, id: &str) -> Option<&'static FilterOption> {
        self.filters().iter().find(|filter| filter.id == id)
    }
}

impl fmt::Display for ApiContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cluster => write!(f, "cluster"),
            Self::Macro => write!(f, "macro"),
        }
    }
}
