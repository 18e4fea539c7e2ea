// ABOUTME: Result renderer that maps view-state to exactly one screen and formats it as text
// ABOUTME: Precedence is loading > error > results > empty > prompt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::state::ViewState;
use nutrition_core::constants::messages;
use nutrition_core::models::{
    ClusterSummary, FilterOption, MacroItem, NutritionItem, NutritionResults,
};
use serde::Serialize;
use std::fmt::Write;

/// The single thing the result area shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    /// A request is in flight
    Loading,
    /// The last request failed
    Error {
        /// Message for the error banner
        message: String,
    },
    /// The last request returned at least one item
    Results {
        /// Items to list
        results: NutritionResults,
    },
    /// The last request succeeded with no items
    Empty,
    /// No filter has been selected yet
    Prompt,
}

impl Screen {
    /// Select the screen for `state`
    #[must_use]
    pub fn from_state(state: &ViewState) -> Self {
        if state.is_loading() {
            return Self::Loading;
        }
        if !state.error().is_empty() {
            return Self::Error {
                message: state.error().to_owned(),
            };
        }
        if let Some(results) = state.results().filter(|results| !results.is_empty()) {
            return Self::Results {
                results: results.clone(),
            };
        }
        if state.selected().is_some() {
            return Self::Empty;
        }
        Self::Prompt
    }
}

/// Render the whole page: title, filter controls, and the result area
#[must_use]
pub fn render_page(state: &ViewState, filters: &[FilterOption]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", messages::TITLE);
    let _ = writeln!(out);
    out.push_str(&render_filters(filters, state.selected_id()));
    let _ = writeln!(out);
    out.push_str(&render_screen(&Screen::from_state(state)));
    out
}

/// Render the filter controls, marking the selected one
#[must_use]
pub fn render_filters(filters: &[FilterOption], selected_id: Option<&str>) -> String {
    filters.iter().fold(String::new(), |mut out, filter| {
        let marker = if selected_id == Some(filter.id) { 'x' } else { ' ' };
        let _ = writeln!(out, "[{marker}] {:<14} ({})", filter.label, filter.id);
        out
    })
}

/// Render the result area for one screen
#[must_use]
pub fn render_screen(screen: &Screen) -> String {
    let mut out = String::new();
    match screen {
        Screen::Loading => {
            let _ = writeln!(out, "{}", messages::LOADING);
        }
        Screen::Error { message } => {
            let _ = writeln!(out, "{message}");
        }
        Screen::Results { results } => {
            let _ = writeln!(out, "{}", messages::RESULTS_HEADING);
            match results {
                NutritionResults::Cluster { summary, items } => {
                    let _ = writeln!(out, "{}", cluster_header(summary));
                    for item in items {
                        let _ = writeln!(out);
                        out.push_str(&render_item(item));
                    }
                }
                NutritionResults::Macro { items } => {
                    for item in items {
                        let _ = writeln!(out);
                        out.push_str(&render_macro_item(item));
                    }
                }
            }
        }
        Screen::Empty => {
            let _ = writeln!(out, "{}", messages::NO_RESULTS);
        }
        Screen::Prompt => {
            let _ = writeln!(out, "{}", messages::SELECT_PROMPT);
        }
    }
    out
}

/// `Cluster: <name> (<count> items)`
#[must_use]
pub fn cluster_header(summary: &ClusterSummary) -> String {
    format!("Cluster: {} ({} items)", summary.name, summary.count)
}

/// One cluster item: description with badge, then the nutrient line
#[must_use]
pub fn render_item(item: &NutritionItem) -> String {
    format!(
        "{} [{}]\n  Calories: {} | Protein: {}g | Fat: {}g | Carbs: {}g | Fiber: {}g | Sodium: {}mg\n",
        item.description,
        item.cluster_name,
        format_calories(item.calories_final),
        format_fixed(item.protein, 1),
        format_fixed(item.fat, 1),
        format_fixed(item.carbohydrate, 1),
        format_fixed(item.fiber, 1),
        format_fixed(item.sodium, 0),
    )
}

/// One macro item: name, then protein/fat/carbs
#[must_use]
pub fn render_macro_item(item: &MacroItem) -> String {
    format!(
        "{}\n  Protein: {}g | Fat: {}g | Carbs: {}g\n",
        item.name,
        format_fixed(item.protein, 1),
        format_fixed(item.fat, 1),
        format_fixed(item.carbs, 1),
    )
}

/// Shortest decimal form; absent, zero, and NaN print as `0`
#[must_use]
pub fn format_calories(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => format!("{v}"),
        _ => "0".to_owned(),
    }
}

/// Fixed decimals with ties rounded away from zero; absent prints as `0`
#[must_use]
pub fn format_fixed(value: Option<f64>, decimals: u8) -> String {
    value.map_or_else(
        || "0".to_owned(),
        |v| {
            // -0.0 prints unsigned
            let v = if v == 0.0 { 0.0 } else { v };
            let scale = 10f64.powi(i32::from(decimals));
            let rounded = (v * scale).round() / scale;
            let precision = usize::from(decimals);
            format!("{rounded:.precision$}")
        },
    )
}
