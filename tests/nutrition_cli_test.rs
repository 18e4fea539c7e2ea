// ABOUTME: Integration tests for the nutrition-filter binary
// ABOUTME: Runs CLI commands as a child process and checks exit codes and stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Integration tests for the nutrition-filter binary.
//!
//! Commands that query the nutrition service run against the axum stub from
//! `common`; the child process is driven from a blocking task so the stub keeps
//! serving on the test runtime.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::start_stub;
use nutrition_filter::constants::env_config;
use serde_json::Value;
use std::io::Write;
use std::process::{Command, Stdio};
use tokio::task::spawn_blocking;

/// Path to the nutrition-filter binary built for this test run
fn cli_binary() -> &'static str {
    env!("CARGO_BIN_EXE_nutrition-filter")
}

fn cli_command(args: &[&str]) -> Command {
    let mut command = Command::new(cli_binary());
    command.args(args);
    for key in [
        env_config::BASE_URL,
        env_config::LIMIT,
        env_config::CONTRACT,
        env_config::TIMEOUT_SECS,
    ] {
        command.env_remove(key);
    }
    command
}

/// Helper to run CLI command and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = cli_command(args).output().unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

/// Run the CLI off the async runtime so the stub server can answer it
async fn run_cli_async(args: Vec<String>) -> (i32, String, String) {
    spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_cli(&args)
    })
    .await
    .unwrap()
}

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| (*arg).to_owned()).collect()
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    for command in ["filters", "query", "browse", "check-service"] {
        assert!(stdout.contains(command), "Help should mention '{command}'");
    }
}

#[test]
fn test_check_service_known_good_prints_true() {
    let (exit_code, stdout, _stderr) = run_cli(&[
        "check-service",
        "--service",
        "BACKSTAGE",
        "--port",
        "9000",
        "--env",
        "node",
    ]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "true");
}

#[test]
fn test_check_service_wrong_port_prints_false() {
    let (exit_code, stdout, _stderr) = run_cli(&[
        "check-service",
        "--service",
        "BACKSTAGE",
        "--port",
        "8000",
        "--env",
        "node",
    ]);

    assert_eq!(exit_code, 1);
    assert_eq!(stdout.trim(), "false");
}

#[test]
fn test_check_service_other_service_prints_false() {
    let (exit_code, stdout, _stderr) = run_cli(&[
        "check-service",
        "--service",
        "gitea",
        "--port",
        "9000",
        "--env",
        "node",
    ]);

    assert_eq!(exit_code, 1);
    assert_eq!(stdout.trim(), "false");
}

#[test]
fn test_check_service_unknown_service_is_usage_error() {
    let (exit_code, stdout, stderr) = run_cli(&[
        "check-service",
        "--service",
        "jenkins",
        "--port",
        "9000",
        "--env",
        "node",
    ]);

    assert_eq!(exit_code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("jenkins"), "stderr: {stderr}");
}

#[test]
fn test_filters_lists_cluster_table() {
    let (exit_code, stdout, _stderr) = run_cli(&["filters"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("cluster contract"));
    assert!(stdout.contains("high-carbs"));
    assert!(stdout.contains("carbs=High Carb"));
    assert!(!stdout.contains("low-fat"));
}

#[test]
fn test_filters_lists_macro_table() {
    let (exit_code, stdout, _stderr) = run_cli(&["filters", "--contract", "macro"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("macro contract"));
    assert!(stdout.contains("low-fat"));
    assert!(stdout.contains("fat=low"));
}

#[tokio::test]
async fn test_query_renders_text_page() {
    let stub = start_stub().await;

    let (exit_code, stdout, stderr) = run_cli_async(owned(&[
        "query",
        "high-protein",
        "--base-url",
        stub.base_url.as_str(),
    ]))
    .await;

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    assert!(stdout.starts_with("Nutrition Filter\n"));
    assert!(stdout.contains("[x] High Protein"));
    assert!(stdout.contains("Cluster: High Protein (1 items)"));
    assert!(stdout.contains("Egg [High Protein]"));
    assert!(stdout.contains("Sodium: 62mg"));
    assert_eq!(
        stub.requests(),
        vec!["/foods/by-cluster?cluster_name=High%20Protein&limit=50".to_owned()]
    );
}

#[tokio::test]
async fn test_query_json_output() {
    let stub = start_stub().await;

    let (exit_code, stdout, stderr) = run_cli_async(owned(&[
        "query",
        "high-protein",
        "--format",
        "json",
        "--limit",
        "5",
        "--base-url",
        stub.base_url.as_str(),
    ]))
    .await;

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    let payload: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(payload["contract"], "cluster");
    assert_eq!(payload["selected"], "high-protein");
    assert_eq!(payload["screen"]["screen"], "results");
    assert_eq!(payload["screen"]["results"]["summary"]["name"], "High Protein");
    assert_eq!(
        payload["screen"]["results"]["items"][0]["description"],
        "Egg"
    );
    assert_eq!(
        stub.requests(),
        vec!["/foods/by-cluster?cluster_name=High%20Protein&limit=5".to_owned()]
    );
}

#[tokio::test]
async fn test_query_failed_fetch_shows_banner() {
    let stub = start_stub().await;

    let (exit_code, stdout, _stderr) = run_cli_async(owned(&[
        "query",
        "high-sodium",
        "--base-url",
        stub.base_url.as_str(),
    ]))
    .await;

    assert_eq!(exit_code, 0);
    assert!(stdout.ends_with("Failed to fetch data\n"));
}

#[tokio::test]
async fn test_query_unknown_filter_fails() {
    let stub = start_stub().await;

    let (exit_code, stdout, stderr) = run_cli_async(owned(&[
        "query",
        "ultra-protein",
        "--base-url",
        stub.base_url.as_str(),
    ]))
    .await;

    assert_eq!(exit_code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Filter 'ultra-protein' not found"));
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn test_browse_reads_clicks_from_stdin_and_shows_latest() {
    let stub = start_stub().await;
    let base_url = stub.base_url.clone();

    let output = spawn_blocking(move || {
        let mut child = cli_command(&["browse", "--base-url", base_url.as_str()])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        child
            .stdin
            .take()
            .unwrap()
            .write_all(b"high-fat\n\nnot-a-filter\nhigh-carbs\n")
            .unwrap();
        child.wait_with_output().unwrap()
    })
    .await
    .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("[x] High Carbs"));
    assert!(stdout.contains("Rice [High Carb]"));
    assert!(!stdout.contains("Butter"));
    assert!(stub
        .requests()
        .contains(&"/foods/by-cluster?cluster_name=High%20Carb&limit=50".to_owned()));
}
