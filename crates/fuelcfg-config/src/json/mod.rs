//! fuels.config.json parsing and rendering

use fuelcfg_core::error::FuelcfgError;
use serde_json::{json, Value};

use crate::ConfigResult;

/// Parse JSON text into the raw mapping consumed by [`crate::project::load`]
pub fn parse_config_json(content: &str) -> ConfigResult<Value> {
    serde_json::from_str(content).map_err(|e| FuelcfgError::JsonParse {
        message: e.to_string(),
        line: e.line(),
        column: e.column(),
    })
}

/// Render a starter fuels.config.json
pub fn render_default_config(contracts: &[&str], output: &str) -> ConfigResult<String> {
    let doc = json!({
        "contracts": contracts,
        "output": output,
    });

    let mut text =
        serde_json::to_string_pretty(&doc).map_err(|e| FuelcfgError::serialize("JSON", e))?;
    text.push('\n');
    Ok(text)
}
