//! # fuelcfg-cli
//!
//! Command-line front end for fuels contract project configs.
//!
//! Handles command parsing, sets up logging and error handling, and
//! dispatches to the appropriate command handlers.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use fuelcfg_core::error::FuelcfgResult;
use std::process::ExitCode;
use tracing::{error, info};

mod commands;
mod output;

use commands::CommandContext;
use output::errors::ErrorFormatter;

/// Check, inspect and scaffold fuels contract project configs
#[derive(Parser)]
#[command(name = "fuelcfg", version, about = "fuels project config tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the project config
    Check {
        /// Config file to use instead of searching from the working directory
        #[arg(long, env = "FUELCFG_CONFIG")]
        config: Option<Utf8PathBuf>,
    },
    /// Print the normalized project config
    Show {
        #[arg(long, env = "FUELCFG_CONFIG")]
        config: Option<Utf8PathBuf>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a starter config in the working directory
    Init {
        #[arg(long, value_enum, default_value_t = InitFormat::Toml)]
        format: InitFormat,
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Show version information
    Version,
}

/// Format written by `fuelcfg init`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InitFormat {
    Toml,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    info!("Starting fuelcfg v{}", env!("CARGO_PKG_VERSION"));

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprint!("{}", ErrorFormatter::new().format_error(&e));
            ExitCode::FAILURE
        },
    }
}

fn run_cli(cli: Cli) -> FuelcfgResult<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| fuelcfg_core::error::FuelcfgError::Io {
            message: "Failed to create async runtime".to_string(),
            source: e,
        })?;

    rt.block_on(async {
        let ctx = CommandContext::new()?;
        commands::dispatch_command(cli.command, &ctx).await
    })
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "fuelcfg={level},fuelcfg_config={level},fuelcfg_core={level}"
        ))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("fuelcfg encountered an unexpected error: {}", panic_info);
        eprintln!("fuelcfg crashed! This is a bug.");
        eprintln!("Please report this at: https://github.com/fuelcfg/fuelcfg/issues");
        eprintln!("Error: {}", panic_info);
    }));
}
