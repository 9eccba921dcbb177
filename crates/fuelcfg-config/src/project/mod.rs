//! Validation and normalization of the project configuration record
//!
//! [`load`] is a pure transform: raw mapping in, [`ProjectConfig`] or the
//! first validation error out. It never touches the filesystem.

use camino::{Utf8Path, Utf8PathBuf};
use fuelcfg_core::error::FuelcfgError;
use fuelcfg_core::utils::path::{base_dir_of, resolve_path};
use indexmap::IndexSet;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::ConfigResult;

/// Keys understood by the loader
const KNOWN_KEYS: &[&str] = &["contracts", "scripts", "predicates", "output"];

/// Normalized, immutable project configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    contracts: Vec<Utf8PathBuf>,
    scripts: Vec<Utf8PathBuf>,
    predicates: Vec<Utf8PathBuf>,
    output: Utf8PathBuf,
    base_dir: Utf8PathBuf,
}

/// Caller-supplied policy for values the config may leave out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadPolicy {
    /// Output directory used when `output` is absent, relative to the base directory
    pub default_output: String,
}

impl Default for LoadPolicy {
    fn default() -> Self {
        Self {
            default_output: "src/contracts".to_string(),
        }
    }
}

impl ProjectConfig {
    /// Contract directories in declaration order
    pub fn contracts(&self) -> &[Utf8PathBuf] {
        &self.contracts
    }

    /// Script program directories in declaration order
    pub fn scripts(&self) -> &[Utf8PathBuf] {
        &self.scripts
    }

    /// Predicate program directories in declaration order
    pub fn predicates(&self) -> &[Utf8PathBuf] {
        &self.predicates
    }

    /// Directory generated bindings are written to
    pub fn output(&self) -> &Utf8Path {
        &self.output
    }

    /// Directory every relative path was resolved against
    pub fn base_dir(&self) -> &Utf8Path {
        &self.base_dir
    }
}

/// Load a configuration with the default [`LoadPolicy`]
pub fn load(raw: &Value, config_file: &Utf8Path) -> ConfigResult<ProjectConfig> {
    load_with_policy(raw, config_file, &LoadPolicy::default())
}

/// Validate `raw` and resolve its paths against the directory of `config_file`
pub fn load_with_policy(
    raw: &Value,
    config_file: &Utf8Path,
    policy: &LoadPolicy,
) -> ConfigResult<ProjectConfig> {
    let map = raw
        .as_object()
        .ok_or_else(|| FuelcfgError::invalid_type("<root>", "a table of options", kind_of(raw)))?;

    for key in map.keys().filter(|k| !KNOWN_KEYS.contains(&k.as_str())) {
        warn!("Ignoring unknown config key '{}'", key);
    }

    let base_dir = base_dir_of(config_file);

    // An explicit null counts as an absent key
    let field = |key: &str| map.get(key).filter(|value| !value.is_null());

    let contracts = match field("contracts") {
        None => {
            return Err(FuelcfgError::missing(
                "contracts",
                "expected a non-empty list of contract directories",
            ))
        },
        Some(value) => path_list("contracts", value, &base_dir)?,
    };
    if contracts.is_empty() {
        return Err(FuelcfgError::missing(
            "contracts",
            "the list is empty; at least one contract directory is required",
        ));
    }

    let scripts = optional_path_list(field("scripts"), "scripts", &base_dir)?;
    let predicates = optional_path_list(field("predicates"), "predicates", &base_dir)?;

    let output = match field("output") {
        None => resolve_path("output", &base_dir, &policy.default_output)?,
        Some(Value::String(s)) if s.trim().is_empty() => {
            return Err(FuelcfgError::missing(
                "output",
                "expected a non-empty bindings directory",
            ))
        },
        Some(Value::String(s)) => resolve_path("output", &base_dir, s)?,
        Some(other) => {
            return Err(FuelcfgError::invalid_type("output", "a string", kind_of(other)))
        },
    };

    debug!(
        "Loaded config from {}: {} contract(s), output {}",
        config_file,
        contracts.len(),
        output
    );

    Ok(ProjectConfig {
        contracts,
        scripts,
        predicates,
        output,
        base_dir,
    })
}

fn optional_path_list(
    value: Option<&Value>,
    field: &str,
    base_dir: &Utf8Path,
) -> ConfigResult<Vec<Utf8PathBuf>> {
    match value {
        None => Ok(Vec::new()),
        Some(value) => path_list(field, value, base_dir),
    }
}

/// Resolve an array of path strings, dropping later duplicates
fn path_list(field: &str, value: &Value, base_dir: &Utf8Path) -> ConfigResult<Vec<Utf8PathBuf>> {
    let items = value
        .as_array()
        .ok_or_else(|| FuelcfgError::invalid_type(field, "an array of strings", kind_of(value)))?;

    let mut seen = IndexSet::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let entry = format!("{field}[{index}]");
        let raw = item
            .as_str()
            .ok_or_else(|| FuelcfgError::invalid_type(&entry, "a string", kind_of(item)))?;

        let resolved = resolve_path(&entry, base_dir, raw)?;
        if !seen.insert(resolved) {
            debug!("Dropping duplicate entry {} ('{}')", entry, raw);
        }
    }

    Ok(seen.into_iter().collect())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "table",
    }
}
