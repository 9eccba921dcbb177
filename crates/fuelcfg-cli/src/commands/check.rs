//! `fuelcfg check` command implementation.

use camino::Utf8PathBuf;
use fuelcfg_core::error::FuelcfgResult;

use super::CommandContext;

/// Execute the `fuelcfg check` command
pub async fn execute(config: Option<Utf8PathBuf>, ctx: &CommandContext) -> FuelcfgResult<()> {
    let (project, path) = ctx.load_config(config.as_deref()).await?;

    ctx.output.success(&format!(
        "{} is valid: {} contract(s), {} script(s), {} predicate(s)",
        path,
        project.contracts().len(),
        project.scripts().len(),
        project.predicates().len()
    ));
    Ok(())
}
