//! Config file discovery and loading

use camino::{Utf8Path, Utf8PathBuf};
use fuelcfg_core::error::FuelcfgError;
use tracing::{debug, info};

use crate::project::{load_with_policy, LoadPolicy, ProjectConfig};
use crate::ConfigResult;

/// File names searched for in each directory, in priority order
pub const CONFIG_FILE_NAMES: &[&str] = &["fuels.config.toml", "fuels.config.json"];

/// On-disk format of a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Utf8Path) -> ConfigResult<Self> {
        match path.extension() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(FuelcfgError::UnsupportedFormat {
                path: path.to_string(),
            }),
        }
    }

    /// Canonical file name for this format
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Toml => CONFIG_FILE_NAMES[0],
            Self::Json => CONFIG_FILE_NAMES[1],
        }
    }

    /// Parse config text in this format into a raw mapping
    pub fn parse(self, content: &str) -> ConfigResult<serde_json::Value> {
        match self {
            Self::Toml => crate::toml::parse_config_toml(content),
            Self::Json => crate::json::parse_config_json(content),
        }
    }
}

/// Main configuration loading interface
pub struct ConfigLoader {
    /// Directory the search starts from
    cwd: Utf8PathBuf,
    /// Last directory searched; the walk does not go above it
    ceiling: Option<Utf8PathBuf>,
    policy: LoadPolicy,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new(cwd: Utf8PathBuf) -> Self {
        Self {
            cwd,
            ceiling: None,
            policy: LoadPolicy::default(),
        }
    }

    /// Replace the policy used for omitted values
    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Stop the upward search at `dir` instead of the filesystem root
    pub fn with_ceiling(mut self, dir: Utf8PathBuf) -> Self {
        self.ceiling = Some(dir);
        self
    }

    /// Find the config file, walking up from the working directory
    pub fn find_config_file(&self) -> ConfigResult<Utf8PathBuf> {
        let mut current = Some(self.cwd.as_path());

        while let Some(dir) = current {
            for name in CONFIG_FILE_NAMES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    debug!("Found config file {}", candidate);
                    return Ok(candidate);
                }
            }
            if self.ceiling.as_deref() == Some(dir) {
                break;
            }
            current = dir.parent();
        }

        Err(FuelcfgError::ConfigNotFound {
            searched_from: self.cwd.to_string(),
        })
    }

    /// Read, parse and validate a specific config file
    pub async fn load_file(&self, path: &Utf8Path) -> ConfigResult<ProjectConfig> {
        let format = ConfigFormat::from_path(path)?;

        // Relative paths are taken relative to the loader's working directory
        let location = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        };

        let content = tokio::fs::read_to_string(&location)
            .await
            .map_err(|e| FuelcfgError::io(format!("Failed to read {}", location), e))?;

        let raw = format.parse(&content).map_err(|e| e.in_file(path.as_str()))?;

        let config =
            load_with_policy(&raw, &location, &self.policy).map_err(|e| e.in_file(path.as_str()))?;

        info!(
            "Loaded {} with {} contract(s)",
            path,
            config.contracts().len()
        );
        Ok(config)
    }

    /// Find and load the project's config file
    pub async fn load_project(&self) -> ConfigResult<(ProjectConfig, Utf8PathBuf)> {
        let path = self.find_config_file()?;
        let config = self.load_file(&path).await?;
        Ok((config, path))
    }
}
