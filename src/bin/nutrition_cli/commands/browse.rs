// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Streaming browse command for nutrition-filter
// ABOUTME: Treats each stdin line as a click without waiting for earlier requests

use std::sync::Arc;

use nutrition_filter::config::ClientConfig;
use nutrition_filter::controller::FilterController;
use nutrition_filter::errors::{AppError, AppResult};
use nutrition_filter::external::NutritionClient;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::helpers::display::{print_page, OutputFormat};

/// Click every filter id read from stdin, then print the settled page
pub async fn run(config: ClientConfig, format: OutputFormat) -> AppResult<()> {
    let controller = FilterController::new(Arc::new(NutritionClient::new(config)?));
    let mut lines = BufReader::new(stdin()).lines();

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| AppError::internal(format!("Failed to read stdin: {e}")))?
    {
        let filter_id = line.trim();
        if filter_id.is_empty() {
            continue;
        }
        if let Err(e) = controller.click(filter_id).await {
            warn!("Skipping click: {}", e.message);
        }
    }

    controller.wait_until_settled().await;
    print_page(&controller, format).await?;
    controller.unmount().await;
    Ok(())
}
