// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Service configuration check command for nutrition-filter
// ABOUTME: Prints true or false and maps the result to the process exit code

use std::process::ExitCode;

use nutrition_filter::validation::{Service, ServiceCheck};

/// Run the check and print its result
pub fn run(service: Service, port: u16, env: String) -> ExitCode {
    let valid = ServiceCheck::new(service, port, env).validate();
    println!("{valid}");
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
