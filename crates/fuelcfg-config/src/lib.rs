//! Configuration loading for fuels contract projects
//!
//! This crate reads `fuels.config.toml` and `fuels.config.json` files,
//! validates them and resolves every declared directory against the config
//! file's own location, producing an immutable [`ProjectConfig`].

pub mod toml;
pub mod json;
pub mod project;
pub mod loader;

// Re-export main types
pub use project::{load, load_with_policy, LoadPolicy, ProjectConfig};
pub use loader::{ConfigFormat, ConfigLoader, CONFIG_FILE_NAMES};

use fuelcfg_core::error::FuelcfgError;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, FuelcfgError>;
