// ABOUTME: Headless view for the nutrition filter page
// ABOUTME: View-state with request tickets plus the text renderer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Result renderer
pub mod render;
/// Transient view-state and request tickets
pub mod state;

pub use render::{render_page, render_screen, Screen};
pub use state::{RequestTicket, Settlement, ViewState};
