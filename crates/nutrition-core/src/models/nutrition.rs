// ABOUTME: Nutrition item shapes returned by the nutrition lookup service
// ABOUTME: NutritionItem, ClusterResponse, MacroItem, and the NutritionResults union
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A food record from the cluster contract.
///
/// Nutrient fields may be missing or `null`; they decode to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionItem {
    /// `FoodData` Central ID
    pub fdc_id: u64,
    /// Food description
    pub description: String,
    /// Cluster label assigned by the service
    pub cluster_name: String,
    /// Energy (kcal)
    #[serde(default)]
    pub calories_final: Option<f64>,
    /// Protein (g)
    #[serde(default)]
    pub protein: Option<f64>,
    /// Total fat (g)
    #[serde(default)]
    pub fat: Option<f64>,
    /// Carbohydrate (g)
    #[serde(default)]
    pub carbohydrate: Option<f64>,
    /// Dietary fiber (g)
    #[serde(default)]
    pub fiber: Option<f64>,
    /// Sodium (mg)
    #[serde(default)]
    pub sodium: Option<f64>,
}

/// Envelope returned by `GET /foods/by-cluster`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterResponse {
    /// Cluster that was queried
    pub cluster_name: String,
    /// Number of items the service reports
    pub count: u64,
    /// Matching foods, in service order
    pub results: Vec<NutritionItem>,
}

impl ClusterResponse {
    /// Header summary for this response
    #[must_use]
    pub fn summary(&self) -> ClusterSummary {
        ClusterSummary {
            name: self.cluster_name.clone(),
            count: self.count,
        }
    }
}

/// Cluster name and reported count shown above the result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSummary {
    /// Cluster name
    pub name: String,
    /// Item count reported by the service
    pub count: u64,
}

/// A simplified food record from the legacy macro contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroItem {
    /// Food name
    pub name: String,
    /// Protein (g)
    #[serde(default)]
    pub protein: Option<f64>,
    /// Fat (g)
    #[serde(default)]
    pub fat: Option<f64>,
    /// Carbohydrates (g)
    #[serde(default)]
    pub carbs: Option<f64>,
}

/// Decoded result of one filter query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "contract", rename_all = "lowercase")]
pub enum NutritionResults {
    /// Cluster contract: summary plus items
    Cluster {
        /// Header summary
        summary: ClusterSummary,
        /// Items from the `results` field
        items: Vec<NutritionItem>,
    },
    /// Macro contract: the full decoded array
    Macro {
        /// Items as returned
        items: Vec<MacroItem>,
    },
}

impl NutritionResults {
    /// Number of displayed items
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Cluster { items, .. } => items.len(),
            Self::Macro { items } => items.len(),
        }
    }

    /// Whether there is nothing to display
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<ClusterResponse> for NutritionResults {
    fn from(response: ClusterResponse) -> Self {
        let summary = response.summary();
        Self::Cluster {
            summary,
            items: response.results,
        }
    }
}

impl From<Vec<MacroItem>> for NutritionResults {
    fn from(items: Vec<MacroItem>) -> Self {
        Self::Macro { items }
    }
}
