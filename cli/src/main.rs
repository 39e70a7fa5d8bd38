//! # Magnum Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `magnum` CLI, a client for
//! the Magnum container orchestration API. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading connection settings and building the API gateway
//! - Routing execution to the command registry
//!
//! ## Architecture
//!
//! Every invocation is a single request/response cycle:
//! 1. Parse command-line args via Clap (usage errors exit with status 2)
//! 2. Configure logging based on verbosity level
//! 3. Load configuration and construct one `HttpGateway`
//! 4. Dispatch the command, which makes exactly one API call
//! 5. Print any error to stderr and exit with status 1
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! magnum --help
//!
//! # List bays against an explicit endpoint
//! magnum --magnum-url http://127.0.0.1:9511 bay-list
//!
//! # Create a container from stdin with debug logging
//! echo '{"name": "web", "image_id": "nginx"}' | magnum -vv container-create
//! ```
//!
use clap::{error::ErrorKind, Parser};
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command declarations and handlers
mod common; // Gateway, filesystem, and UI utilities
mod core; // Errors, configuration, and the resource model

use crate::common::gateway::HttpGateway;
use crate::core::{config, error::Result};
use anyhow::Context;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "magnum",
    about = "Command-line client for the Magnum container orchestration API",
    long_about = "Manage bays, bay models, nodes, pods, replication controllers, services,\n\
                  and containers through the Magnum REST API.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Magnum API endpoint, e.g. http://127.0.0.1:9511.
    #[arg(long = "magnum-url", env = "MAGNUM_URL", global = true, value_name = "URL")]
    magnum_url: Option<String>,

    /// Auth token sent as X-Auth-Token.
    #[arg(
        long = "os-auth-token",
        env = "OS_AUTH_TOKEN",
        global = true,
        value_name = "TOKEN",
        hide_env_values = true
    )]
    os_auth_token: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::try_parse().unwrap_or_else(|e| exit_with_usage(e));

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli.command);

    if let Err(e) = run(cli).await {
        tracing::debug!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Builds the gateway from configuration and runs the parsed command.
async fn run(cli: Cli) -> Result<()> {
    let mut cfg = config::load_config().context("Failed to load magnum configuration")?;
    cfg.apply_overrides(cli.magnum_url, cli.os_auth_token);
    let connection = cfg.connection()?;
    let gateway = HttpGateway::new(&connection)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::dispatch(cli.command, &gateway, &mut out).await
}

/// Reports a usage error and exits. Unknown or missing commands also list
/// every valid command name.
fn exit_with_usage(err: clap::Error) -> ! {
    if matches!(
        err.kind(),
        ErrorKind::InvalidSubcommand
            | ErrorKind::MissingSubcommand
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    ) {
        let _ = err.print();
        eprintln!("\nValid commands: {}", commands::command_names().join(", "));
        std::process::exit(2);
    }
    err.exit()
}
