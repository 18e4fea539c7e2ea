// ABOUTME: Transient view-state for one filter page: selection, loading, error, and results
// ABOUTME: Tags each request with a ticket so late responses from older clicks are dropped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # View State
//!
//! State is owned by a single page instance and reset only by clicks. A click
//! goes through [`ViewState::begin_query`], which hands out a
//! [`RequestTicket`]; the response is applied with [`ViewState::settle`].
//! Only the ticket issued by the most recent click is accepted; anything
//! older is reported as [`Settlement::Stale`] and leaves state untouched.

use nutrition_core::errors::AppResult;
use nutrition_core::models::{ClusterSummary, FilterOption, NutritionResults};
use serde::Serialize;

/// Tag attached to one in-flight request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequestTicket {
    /// Monotonic sequence number, unique per view-state
    pub id: u64,
    /// Filter whose click issued the request
    pub filter: FilterOption,
}

/// What happened to a settled response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The response was for the latest request and is now displayed
    Applied,
    /// A newer request was issued (or the view unmounted); response dropped
    Stale,
}

/// Transient state backing the result renderer
#[derive(Debug, Clone, Default, Serialize)]
pub struct ViewState {
    selected: Option<FilterOption>,
    loading: bool,
    error: String,
    results: Option<NutritionResults>,
    #[serde(skip)]
    issued: u64,
    #[serde(skip)]
    accepting: Option<u64>,
}

impl ViewState {
    /// Fresh state: nothing selected, nothing loaded
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a click on `filter` and issue the ticket for its request.
    ///
    /// Marks the filter selected, clears the previous error and sets loading.
    /// Previously displayed results stay in place until this request settles.
    pub fn begin_query(&mut self, filter: FilterOption) -> RequestTicket {
        self.issued += 1;
        self.accepting = Some(self.issued);
        self.selected = Some(filter);
        self.error.clear();
        self.loading = true;

        RequestTicket {
            id: self.issued,
            filter,
        }
    }

    /// Apply the outcome of the request identified by `ticket`.
    ///
    /// On success the results replace whatever was shown. On failure the
    /// error message is shown and results are cleared. Loading ends either way.
    pub fn settle(
        &mut self,
        ticket: &RequestTicket,
        outcome: AppResult<NutritionResults>,
    ) -> Settlement {
        if self.accepting != Some(ticket.id) {
            return Settlement::Stale;
        }

        match outcome {
            Ok(results) => {
                self.results = Some(results);
            }
            Err(error) => {
                self.error = error.user_message();
                self.results = None;
            }
        }
        self.loading = false;
        self.accepting = None;
        Settlement::Applied
    }

    /// Stop accepting responses for any in-flight request (unmount)
    pub fn invalidate(&mut self) {
        self.accepting = None;
        self.loading = false;
    }

    /// Ticket id of the most recently issued request
    #[must_use]
    pub const fn latest_ticket(&self) -> u64 {
        self.issued
    }

    /// Currently selected filter
    #[must_use]
    pub const fn selected(&self) -> Option<&FilterOption> {
        self.selected.as_ref()
    }

    /// Id of the currently selected filter
    #[must_use]
    pub fn selected_id(&self) -> Option<&'static str> {
        self.selected.map(|filter| filter.id)
    }

    /// Whether a request is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current error message (empty when there is none)
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Results from the last applied successful request
    #[must_use]
    pub const fn results(&self) -> Option<&NutritionResults> {
        self.results.as_ref()
    }

    /// Cluster summary, when the displayed results carry one
    #[must_use]
    pub fn cluster_summary(&self) -> Option<&ClusterSummary> {
        match self.results.as_ref()? {
            NutritionResults::Cluster { summary, .. } => Some(summary),
            NutritionResults::Macro { .. } => None,
        }
    }

    /// Number of displayed result items
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.results.as_ref().map_or(0, NutritionResults::len)
    }
}
