//! Command implementations and dispatch logic.
//!
//! Each command is implemented as an async function that takes a CommandContext.

use camino::{Utf8Path, Utf8PathBuf};
use fuelcfg_config::{ConfigLoader, ProjectConfig};
use fuelcfg_core::error::{FuelcfgError, FuelcfgResult};
use tracing::info;

pub mod check;
pub mod init;
pub mod show;

#[cfg(test)]
mod tests;

use crate::{output::OutputHandler, Commands};

/// Shared context for all commands
pub struct CommandContext {
    pub cwd: Utf8PathBuf,
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a new command context
    pub fn new() -> FuelcfgResult<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| FuelcfgError::io("Failed to get current directory".to_string(), e))?;

        let cwd = Utf8PathBuf::try_from(cwd).map_err(|e| FuelcfgError::PathResolution {
            field: "working directory".to_string(),
            path: e.as_path().display().to_string(),
            reason: "not valid UTF-8".to_string(),
        })?;

        Ok(Self {
            cwd,
            output: OutputHandler::new(),
        })
    }

    /// Load the config named by `--config`, or search for one from the working directory
    pub async fn load_config(
        &self,
        config: Option<&Utf8Path>,
    ) -> FuelcfgResult<(ProjectConfig, Utf8PathBuf)> {
        let loader = ConfigLoader::new(self.cwd.clone());
        match config {
            Some(path) => {
                let project = loader.load_file(path).await?;
                Ok((project, path.to_path_buf()))
            },
            None => loader.load_project().await,
        }
    }
}

/// Dispatch a command to its handler
pub async fn dispatch_command(command: Commands, ctx: &CommandContext) -> FuelcfgResult<()> {
    match command {
        Commands::Check { config } => {
            info!("Checking configuration");
            check::execute(config, ctx).await
        },
        Commands::Show { config, json } => {
            info!("Showing configuration (json: {})", json);
            show::execute(config, json, ctx).await
        },
        Commands::Init { format, force } => {
            info!("Initializing config (format: {:?}, force: {})", format, force);
            init::execute(format, force, ctx).await
        },
        Commands::Version => {
            info!("Showing version information");
            show_version(ctx);
            Ok(())
        },
    }
}

fn show_version(ctx: &CommandContext) {
    let target = format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS);

    ctx.output.info(&format!("fuelcfg v{}", env!("CARGO_PKG_VERSION")));
    ctx.output.info(&format!("Built: {}", env!("BUILD_DATE")));
    ctx.output.info(&format!("Target: {}", target));
    ctx.output.info(&format!("Rust: {}", env!("RUSTC_VERSION")));
}
