//! `fuelcfg init` command implementation.
//!
//! Writes a starter config pointing at a sibling `contract` directory and
//! generating bindings into `src/contracts`.

use fuelcfg_config::{ConfigFormat, CONFIG_FILE_NAMES};
use fuelcfg_core::error::{FuelcfgError, FuelcfgResult};
use tracing::debug;

use super::CommandContext;
use crate::InitFormat;

const STARTER_CONTRACTS: &[&str] = &["../contract"];
const STARTER_OUTPUT: &str = "./src/contracts";

/// Execute the `fuelcfg init` command
pub async fn execute(format: InitFormat, force: bool, ctx: &CommandContext) -> FuelcfgResult<()> {
    let format = match format {
        InitFormat::Toml => ConfigFormat::Toml,
        InitFormat::Json => ConfigFormat::Json,
    };

    if !force {
        if let Some(existing) = CONFIG_FILE_NAMES
            .iter()
            .map(|name| ctx.cwd.join(name))
            .find(|path| path.exists())
        {
            return Err(FuelcfgError::AlreadyExists {
                path: existing.to_string(),
            });
        }
    }

    let content = match format {
        ConfigFormat::Toml => fuelcfg_config::toml::render_default_config(STARTER_CONTRACTS, STARTER_OUTPUT),
        ConfigFormat::Json => fuelcfg_config::json::render_default_config(STARTER_CONTRACTS, STARTER_OUTPUT)?,
    };

    let path = ctx.cwd.join(format.file_name());
    debug!("Writing starter config to {}", path);
    tokio::fs::write(&path, content)
        .await
        .map_err(|e| FuelcfgError::io(format!("Failed to write {}", path), e))?;

    ctx.output.success(&format!("Created {}", path));
    ctx.output.info("Edit 'contracts' to list your contract directories, then run 'fuelcfg check'.");
    Ok(())
}
