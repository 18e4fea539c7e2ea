// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for nutrition-filter
// ABOUTME: Prints the rendered page as text or the current screen as JSON

use clap::ValueEnum;
use nutrition_filter::controller::FilterController;
use nutrition_filter::errors::AppResult;
use serde_json::json;

/// How the final page is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable page
    Text,
    /// `{"contract": .., "selected": .., "screen": ..}` on one line
    Json,
}

/// Print the page held by `controller` to stdout
pub async fn print_page(controller: &FilterController, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", controller.render().await);
        }
        OutputFormat::Json => {
            let state = controller.snapshot().await;
            let payload = json!({
                "contract": controller.contract(),
                "selected": state.selected_id(),
                "screen": controller.screen().await,
            });
            println!("{}", serde_json::to_string(&payload)?);
        }
    }
    Ok(())
}
