// ABOUTME: nutrition-filter CLI - drives the nutrition filter page from the terminal
// ABOUTME: Lists filters, runs single or streamed filter clicks, and runs the service check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # List filter options for the active contract
//! nutrition-filter filters
//!
//! # Click one filter and print the page once the request settles
//! nutrition-filter query high-protein
//!
//! # Same, as JSON
//! nutrition-filter query high-protein --format json
//!
//! # Stream clicks from stdin (one filter id per line)
//! printf 'high-fat\nhigh-fiber\n' | nutrition-filter browse
//!
//! # Check a service triple against the known-good configuration
//! nutrition-filter check-service --service BACKSTAGE --port 9000 --env node
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand, ValueEnum};
use nutrition_filter::{
    config::{ClientConfig, LogLevel},
    errors::AppResult,
    logging::LoggingConfig,
    models::ApiContract,
    validation::Service,
};
use std::process::ExitCode;
use tracing::{debug, error};

use helpers::display::OutputFormat;

#[derive(Parser)]
#[command(
    name = "nutrition-filter",
    about = "Nutrition Filter CLI",
    long_about = "Query the nutrition lookup service by filter and render the result page."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Nutrition service base URL override
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Result limit override for cluster queries
    #[arg(long, global = true)]
    limit: Option<u32>,

    /// API contract override
    #[arg(long, global = true, value_enum)]
    contract: Option<ContractArg>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ContractArg {
    /// `/foods/by-cluster` (default)
    Cluster,
    /// Legacy `/api/nutrition`
    Macro,
}

impl From<ContractArg> for ApiContract {
    fn from(arg: ContractArg) -> Self {
        match arg {
            ContractArg::Cluster => Self::Cluster,
            ContractArg::Macro => Self::Macro,
        }
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List filter options
    Filters,

    /// Click one filter and render the page when it settles
    Query {
        /// Filter id (see `filters`)
        filter_id: String,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Read filter ids from stdin, one click per line
    Browse {
        /// Output format for the final page
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Check a service triple against the known-good configuration
    CheckService {
        /// Service name (BACKSTAGE, GITEA, INFISICAL)
        #[arg(long)]
        service: Service,

        /// Service port
        #[arg(long)]
        port: u16,

        /// Runtime environment
        #[arg(long)]
        env: String,
    },
}

fn load_config(cli: &Cli) -> AppResult<ClientConfig> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url)?;
    }
    if let Some(limit) = cli.limit {
        config = config.with_limit(limit)?;
    }
    if let Some(contract) = cli.contract {
        config = config.with_contract(contract.into());
    }
    Ok(config)
}

async fn run(cli: Cli) -> AppResult<ExitCode> {
    let config = load_config(&cli)?;
    debug!(base_url = %config.base_url, contract = %config.contract, "nutrition-filter starting");

    match cli.command {
        Command::Filters => {
            commands::filters::list(config.contract);
            Ok(ExitCode::SUCCESS)
        }
        Command::Query { filter_id, format } => {
            commands::query::run(config, &filter_id, format).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Browse { format } => {
            commands::browse::run(config, format).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::CheckService { service, port, env } => {
            Ok(commands::check::run(service, port, env))
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    if let Err(e) = logging.init() {
        eprintln!("{e}");
    }

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!(code = ?e.code, "{}", e.message);
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}
