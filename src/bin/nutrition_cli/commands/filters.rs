// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Filter listing command for nutrition-filter
// ABOUTME: Prints id, label, and query parameter for every filter of a contract

use nutrition_filter::models::ApiContract;

/// Print the filter table for `contract`
pub fn list(contract: ApiContract) {
    println!("Filters ({contract} contract):");
    for filter in contract.filters() {
        println!(
            "  {:<14} {:<14} {}={}",
            filter.id, filter.label, filter.param, filter.value
        );
    }
}
