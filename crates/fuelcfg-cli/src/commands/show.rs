//! `fuelcfg show` command implementation.
//!
//! Prints the config after validation and path resolution, which is what
//! the build and binding tools actually consume.

use camino::{Utf8Path, Utf8PathBuf};
use fuelcfg_config::ProjectConfig;
use fuelcfg_core::error::{FuelcfgError, FuelcfgResult};

use super::CommandContext;

/// Execute the `fuelcfg show` command
pub async fn execute(
    config: Option<Utf8PathBuf>,
    json: bool,
    ctx: &CommandContext,
) -> FuelcfgResult<()> {
    let (project, path) = ctx.load_config(config.as_deref()).await?;
    ctx.output.raw(&render(&project, &path, json)?);
    Ok(())
}

/// Render a loaded config as a listing or as pretty JSON
pub fn render(project: &ProjectConfig, path: &Utf8Path, json: bool) -> FuelcfgResult<String> {
    if json {
        let mut text =
            serde_json::to_string_pretty(project).map_err(|e| FuelcfgError::serialize("JSON", e))?;
        text.push('\n');
        return Ok(text);
    }

    let mut text = format!("config:     {}\nbase dir:   {}\n", path, project.base_dir());
    push_list(&mut text, "contracts", project.contracts());
    push_list(&mut text, "scripts", project.scripts());
    push_list(&mut text, "predicates", project.predicates());
    text.push_str(&format!("output:     {}\n", project.output()));
    Ok(text)
}

fn push_list(text: &mut String, label: &str, paths: &[Utf8PathBuf]) {
    if paths.is_empty() {
        return;
    }
    text.push_str(&format!("{label}:\n"));
    for path in paths {
        text.push_str(&format!("  - {path}\n"));
    }
}
