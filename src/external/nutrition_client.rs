// ABOUTME: HTTP client for the nutrition lookup service
// ABOUTME: Builds filter query URLs, issues one GET per query, and decodes either contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Lookup Client
//!
//! Speaks one of two contracts, chosen by [`ClientConfig::contract`]:
//!
//! - cluster (canonical): `GET /foods/by-cluster?cluster_name=<value>&limit=<n>`
//!   returning `{cluster_name, count, results}`
//! - macro (legacy): `GET /api/nutrition?<param>=<value>` returning a bare array
//!
//! Any non-success status, transport failure, or decode failure is a failed
//! fetch. There are no retries.
//!
//! # Example
//! ```rust,no_run
//! use nutrition_filter::config::ClientConfig;
//! use nutrition_filter::external::{NutritionClient, NutritionProvider};
//! use nutrition_core::models::CLUSTER_FILTERS;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = NutritionClient::new(ClientConfig::default())?;
//! let results = client.fetch(&CLUSTER_FILTERS[0]).await?;
//! println!("{} items", results.len());
//! # Ok(())
//! # }
//! ```

use crate::config::ClientConfig;
use crate::logging::AppLogger;
use async_trait::async_trait;
use nutrition_core::constants::{messages, service, service_names};
use nutrition_core::errors::{AppError, AppResult, ErrorCode};
use nutrition_core::models::{
    ApiContract, ClusterResponse, FilterOption, MacroItem, NutritionResults,
};
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use url::Url;
use urlencoding::encode;

/// Source of nutrition results for a filter
#[async_trait]
pub trait NutritionProvider: Send + Sync {
    /// Contract this provider speaks; decides the filter table
    fn contract(&self) -> ApiContract;

    /// URL that a query for `filter` targets
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be built
    fn request_url(&self, filter: &FilterOption) -> AppResult<Url>;

    /// Issue exactly one request for `filter` and decode the body
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or decode failure
    async fn fetch(&self, filter: &FilterOption) -> AppResult<NutritionResults>;
}

/// Build the request URL for `filter` under the given contract
///
/// # Errors
///
/// Returns an error if the resulting URL does not parse
pub fn build_request_url(
    base_url: &str,
    contract: ApiContract,
    limit: u32,
    filter: &FilterOption,
) -> AppResult<Url> {
    let raw = match contract {
        ApiContract::Cluster => format!(
            "{base_url}{}?cluster_name={}&limit={limit}",
            service::BY_CLUSTER_PATH,
            encode(filter.value),
        ),
        ApiContract::Macro => format!(
            "{base_url}{}?{}={}",
            service::MACRO_PATH,
            encode(filter.param),
            encode(filter.value),
        ),
    };
    Url::parse(&raw)
        .map_err(|e| AppError::invalid_input(format!("Invalid request URL '{raw}': {e}")))
}

/// HTTP client for the nutrition lookup service
pub struct NutritionClient {
    config: ClientConfig,
    http_client: Client,
}

impl NutritionClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    pub fn new(config: ClientConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!(
                "{}/{}",
                service_names::NUTRITION_FILTER,
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get(&self, url: Url) -> AppResult<Response> {
        let started = Instant::now();
        let display_url = url.to_string();
        let response = self.http_client.get(url).send().await.map_err(|e| {
            AppError::service_unavailable(service::SERVICE_NAME, e.to_string()).with_source(e)
        })?;

        let status = response.status();
        AppLogger::log_http_response(
            &display_url,
            status.as_u16(),
            started.elapsed().as_millis() as u64,
        );

        if !status.is_success() {
            return Err(AppError::new(
                ErrorCode::ExternalServiceError,
                messages::FETCH_FAILED,
            ));
        }
        Ok(response)
    }
}

#[async_trait]
impl NutritionProvider for NutritionClient {
    fn contract(&self) -> ApiContract {
        self.config.contract
    }

    fn request_url(&self, filter: &FilterOption) -> AppResult<Url> {
        build_request_url(
            &self.config.base_url,
            self.config.contract,
            self.config.limit,
            filter,
        )
    }

    async fn fetch(&self, filter: &FilterOption) -> AppResult<NutritionResults> {
        let url = self.request_url(filter)?;
        let response = self.get(url).await?;

        let decode_error = |e: reqwest::Error| {
            AppError::external_service(service::SERVICE_NAME, format!("JSON parse error: {e}"))
                .with_source(e)
        };

        match self.config.contract {
            ApiContract::Cluster => {
                let body: ClusterResponse = response.json().await.map_err(decode_error)?;
                Ok(body.into())
            }
            ApiContract::Macro => {
                let body: Vec<MacroItem> = response.json().await.map_err(decode_error)?;
                Ok(body.into())
            }
        }
    }
}

/// Canned reply for [`MockNutritionProvider`]
#[derive(Debug, Clone)]
pub struct MockReply {
    /// Delay before the reply resolves
    pub delay: Duration,
    /// `Ok` payload or the error message to fail with
    pub outcome: Result<NutritionResults, String>,
}

/// Mock nutrition provider for testing (no network calls)
///
/// Replies are keyed by filter id. Filters with no reply fail with
/// `Failed to fetch data`, the same as a non-success status.
pub struct MockNutritionProvider {
    contract: ApiContract,
    replies: HashMap<String, MockReply>,
    requests: Mutex<Vec<String>>,
}

impl MockNutritionProvider {
    /// Create an empty mock for `contract`
    #[must_use]
    pub fn new(contract: ApiContract) -> Self {
        Self {
            contract,
            replies: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Reply to `filter_id` with `results` after `delay`
    #[must_use]
    pub fn with_results(
        mut self,
        filter_id: &str,
        results: NutritionResults,
        delay: Duration,
    ) -> Self {
        self.replies.insert(
            filter_id.to_owned(),
            MockReply {
                delay,
                outcome: Ok(results),
            },
        );
        self
    }

    /// Fail `filter_id` with `message` after `delay`
    #[must_use]
    pub fn with_failure(mut self, filter_id: &str, message: &str, delay: Duration) -> Self {
        self.replies.insert(
            filter_id.to_owned(),
            MockReply {
                delay,
                outcome: Err(message.to_owned()),
            },
        );
        self
    }

    /// URLs requested so far, in call order
    #[must_use]
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl NutritionProvider for MockNutritionProvider {
    fn contract(&self) -> ApiContract {
        self.contract
    }

    fn request_url(&self, filter: &FilterOption) -> AppResult<Url> {
        build_request_url(
            service::DEFAULT_BASE_URL,
            self.contract,
            service::DEFAULT_LIMIT,
            filter,
        )
    }

    async fn fetch(&self, filter: &FilterOption) -> AppResult<NutritionResults> {
        let url = self.request_url(filter)?;
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        let Some(reply) = self.replies.get(filter.id).cloned() else {
            return Err(AppError::new(
                ErrorCode::ExternalServiceError,
                messages::FETCH_FAILED,
            ));
        };

        if !reply.delay.is_zero() {
            sleep(reply.delay).await;
        }
        reply
            .outcome
            .map_err(|message| AppError::new(ErrorCode::ExternalServiceError, message))
    }
}
