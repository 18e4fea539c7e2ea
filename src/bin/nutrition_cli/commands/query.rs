// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Single-click query command for nutrition-filter
// ABOUTME: Clicks one filter, waits for the request to settle, and prints the page

use std::sync::Arc;

use nutrition_filter::config::ClientConfig;
use nutrition_filter::controller::FilterController;
use nutrition_filter::errors::AppResult;
use nutrition_filter::external::NutritionClient;
use tracing::info;

use crate::helpers::display::{print_page, OutputFormat};

/// Click `filter_id` and print the settled page
pub async fn run(config: ClientConfig, filter_id: &str, format: OutputFormat) -> AppResult<()> {
    let controller = FilterController::new(Arc::new(NutritionClient::new(config)?));

    let ticket = controller.click(filter_id).await?;
    info!(filter.id = ticket.filter.id, request.ticket = ticket.id, "Waiting for results");
    controller.wait_until_settled().await;

    print_page(&controller, format).await
}
