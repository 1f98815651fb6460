// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! tandem - bounded-resource coordination runs

mod commands;
mod error;
mod output;
mod render;

use clap::{Parser, Subcommand};
use commands::{production, rendezvous, RunOptions};
use error::CliError;
use output::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;
use tandem_core::ConfigFile;

#[derive(Parser)]
#[command(
    name = "tandem",
    version,
    about = "Tandem - producer/consumer and rendezvous coordination runs"
)]
struct Cli {
    /// TOML file with [production] and/or [rendezvous] tables
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Multiply every simulated delay by this factor (0 runs instantly)
    #[arg(long, global = true)]
    scale: Option<f64>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Only show events matching this "role:action" pattern (repeatable)
    #[arg(long = "only", global = true, value_name = "PATTERN")]
    only: Vec<String>,

    /// Write the observed events to this file as JSON lines
    #[arg(long, global = true, value_name = "PATH")]
    events: Option<PathBuf>,

    /// Log coordinator internals to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Producers fill a bounded buffer that consumers drain
    Production(production::ProductionArgs),
    /// Servers meet clients through a bounded waiting area
    Rendezvous(rendezvous::RendezvousArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<CliError>() {
                Some(cli_err) => eprint!("{}", cli_err),
                None => eprintln!("error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let file = match &cli.config {
        Some(path) => ConfigFile::load(path).map_err(CliError::from)?,
        None => ConfigFile::default(),
    };

    let options = RunOptions {
        scale: cli.scale,
        format: cli.format,
        only: cli.only,
        events: cli.events,
    };

    match cli.command {
        Commands::Production(args) => production::handle(args, file.production, &options).await,
        Commands::Rendezvous(args) => rendezvous::handle(args, file.rendezvous, &options).await,
    }
}

/// Logs go to stderr so stdout stays a clean event stream
fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
