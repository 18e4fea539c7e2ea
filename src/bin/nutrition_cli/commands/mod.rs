// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for nutrition-filter
// ABOUTME: Provides filter listing, query, browse, and service check commands

pub mod browse;
pub mod check;
pub mod filters;
pub mod query;
