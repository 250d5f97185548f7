// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ferry - terminal operator CLI

mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{reservation, sailing, vessel};
use ferry_core::FerryConfig;
use ferry_engine::{LedgerError, Terminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::error::CliError;

#[derive(Parser)]
#[command(
    name = "ferry",
    version,
    about = "Ferry terminal - sailings, reservations and check-in"
)]
struct Cli {
    /// Directory holding the data files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Vessel management
    Vessel(vessel::VesselArgs),
    /// Sailing management and reports
    Sailing(sailing::SailingArgs),
    /// Reservations and check-in
    Reservation(reservation::ReservationArgs),
}

fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let err = match e.downcast::<LedgerError>() {
                Ok(ledger) => CliError::from(&ledger),
                Err(other) => CliError::new(format!("{:#}", other)),
            };
            eprint!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(cli.config.as_deref(), cli.data_dir)?;
    let mut terminal = Terminal::open(&config)?;

    let result = match cli.command {
        Commands::Vessel(args) => vessel::handle(args.command, &mut terminal),
        Commands::Sailing(args) => sailing::handle(args.command, &mut terminal, &config),
        Commands::Reservation(args) => reservation::handle(args.command, &mut terminal),
    };

    // Close even when the command failed so every store is synced
    terminal.close()?;
    result
}

/// `--config` first, then `--data-dir` on top, then the platform data dir
fn resolve_config(path: Option<&Path>, data_dir: Option<PathBuf>) -> Result<FerryConfig> {
    let mut config = match path {
        Some(path) => FerryConfig::load(path)?,
        None => FerryConfig::with_data_dir(default_data_dir()),
    };
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }
    tracing::debug!(data_dir = %config.data_dir.display(), "using data directory");
    Ok(config)
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("ferry"))
        .unwrap_or_else(|| FerryConfig::default().data_dir)
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("FERRY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
