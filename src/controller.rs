// ABOUTME: Filter controller that turns clicks into tagged requests and applies their outcomes
// ABOUTME: Owns the view-state for one page instance and cancels in-flight work on unmount
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Filter Controller
//!
//! One controller per rendered page. Each click issues one request on its own
//! task; overlapping requests are not cancelled, but responses belonging to an
//! older click are dropped when they arrive. Dropping or unmounting the
//! controller aborts every request still in flight.

use crate::external::NutritionProvider;
use crate::logging::AppLogger;
use crate::view::{render_page, RequestTicket, Screen, Settlement, ViewState};
use futures_util::FutureExt;
use nutrition_core::constants::messages;
use nutrition_core::errors::{AppError, AppResult};
use nutrition_core::models::{ApiContract, FilterOption, NutritionResults};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::{Mutex, Notify, RwLock};
use tokio::task::JoinHandle;
use tracing::{error, info_span, Instrument};

/// Drives one filter page
pub struct FilterController {
    provider: Arc<dyn NutritionProvider>,
    state: Arc<RwLock<ViewState>>,
    settled: Arc<Notify>,
    in_flight: Mutex<Vec<JoinHandle<()>>>,
}

impl FilterController {
    /// Mount a page backed by `provider`
    #[must_use]
    pub fn new(provider: Arc<dyn NutritionProvider>) -> Self {
        Self {
            provider,
            state: Arc::new(RwLock::new(ViewState::new())),
            settled: Arc::new(Notify::new()),
            in_flight: Mutex::new(Vec::new()),
        }
    }

    /// Contract of the underlying provider
    #[must_use]
    pub fn contract(&self) -> ApiContract {
        self.provider.contract()
    }

    /// Filter controls shown on this page
    #[must_use]
    pub fn filters(&self) -> &'static [FilterOption] {
        self.contract().filters()
    }

    /// Click the filter with `filter_id`.
    ///
    /// Returns once the view-state shows loading and the request has been
    /// spawned; it does not wait for the response.
    ///
    /// # Errors
    ///
    /// Returns an error if no filter with that id exists for this contract
    pub async fn click(&self, filter_id: &str) -> AppResult<RequestTicket> {
        let filter = *self
            .contract()
            .find_filter(filter_id)
            .ok_or_else(|| AppError::not_found(format!("Filter '{filter_id}'")))?;
        Ok(self.click_filter(filter).await)
    }

    /// Click `filter` directly
    pub async fn click_filter(&self, filter: FilterOption) -> RequestTicket {
        let ticket = self.state.write().await.begin_query(filter);
        if let Ok(url) = self.provider.request_url(&filter) {
            AppLogger::log_query_started(filter.id, ticket.id, url.as_str());
        }

        let provider = Arc::clone(&self.provider);
        let state = Arc::clone(&self.state);
        let settled = Arc::clone(&self.settled);
        let span = info_span!("nutrition_query", filter.id = filter.id, request.ticket = ticket.id);

        let handle = tokio::spawn(
            async move {
                let outcome = AssertUnwindSafe(provider.fetch(&ticket.filter))
                    .catch_unwind()
                    .await
                    .unwrap_or_else(|_| {
                        error!(filter.id = ticket.filter.id, "Nutrition query panicked");
                        Err(AppError::internal(messages::FETCH_FAILED))
                    });
                let success = outcome.is_ok();
                let items = outcome.as_ref().map_or(0, NutritionResults::len);

                let mut state = state.write().await;
                match state.settle(&ticket, outcome) {
                    Settlement::Applied => {
                        AppLogger::log_query_applied(ticket.filter.id, ticket.id, success, items);
                    }
                    Settlement::Stale => {
                        AppLogger::log_stale_response(
                            ticket.filter.id,
                            ticket.id,
                            state.latest_ticket(),
                        );
                    }
                }
                drop(state);
                settled.notify_waiters();
            }
            .instrument(span),
        );

        let mut in_flight = self.in_flight.lock().await;
        in_flight.retain(|task| !task.is_finished());
        in_flight.push(handle);
        ticket
    }

    /// Wait until no request is loading
    pub async fn wait_until_settled(&self) {
        loop {
            let notified = self.settled.notified();
            if !self.state.read().await.is_loading() {
                return;
            }
            notified.await;
        }
    }

    /// Copy of the current view-state
    pub async fn snapshot(&self) -> ViewState {
        self.state.read().await.clone()
    }

    /// Screen the result area currently shows
    pub async fn screen(&self) -> Screen {
        Screen::from_state(&*self.state.read().await)
    }

    /// Render the full page as text
    pub async fn render(&self) -> String {
        render_page(&*self.state.read().await, self.filters())
    }

    /// Abort in-flight requests and stop accepting their responses
    pub async fn unmount(&self) {
        for task in self.in_flight.lock().await.drain(..) {
            task.abort();
        }
        self.state.write().await.invalidate();
        self.settled.notify_waiters();
    }
}

impl Drop for FilterController {
    fn drop(&mut self) {
        for task in self.in_flight.get_mut().drain(..) {
            task.abort();
        }
    }
}
