//! Error types and result aliases for fuelcfg operations.
//!
//! Every failure names the offending field or file and the shape that was
//! expected, so a configuration mistake can be fixed in one edit.

use thiserror::Error;

/// Unified error type for all fuelcfg operations
#[derive(Error, Debug)]
pub enum FuelcfgError {
    // Validation errors
    #[error("Missing required field '{field}': {reason}")]
    MissingField { field: String, reason: String },

    #[error("Field '{field}' has the wrong type: expected {expected}, found {found}")]
    InvalidType {
        field: String,
        expected: String,
        found: String,
    },

    #[error("Cannot resolve path '{path}' in field '{field}': {reason}")]
    PathResolution {
        field: String,
        path: String,
        reason: String,
    },

    // Source format errors
    #[error("Failed to parse TOML config: {message} at line {line}, column {column}")]
    TomlParse {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Failed to parse JSON config: {message} at line {line}, column {column}")]
    JsonParse {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Failed to serialize config as {format}: {message}")]
    Serialize { format: String, message: String },

    #[error("Unsupported config format for '{path}': expected a .toml or .json file")]
    UnsupportedFormat { path: String },

    // Discovery errors
    #[error("No fuels.config.toml or fuels.config.json found in {searched_from} or any parent directory")]
    ConfigNotFound { searched_from: String },

    #[error("Config file already exists: {path}")]
    AlreadyExists { path: String },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Wraps an error raised while loading a specific file
    #[error("In file {path}: {source}")]
    InFile {
        path: String,
        #[source]
        source: Box<FuelcfgError>,
    },
}

/// Result type alias for fuelcfg operations
pub type FuelcfgResult<T> = Result<T, FuelcfgError>;

impl FuelcfgError {
    /// Create a missing-field error
    pub fn missing(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-type error
    pub fn invalid_type(
        field: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Create a serialization error for the given output format
    pub fn serialize(format: &str, source: impl std::fmt::Display) -> Self {
        Self::Serialize {
            format: format.to_string(),
            message: source.to_string(),
        }
    }

    /// Attach the path of the file being loaded
    pub fn in_file(self, path: impl Into<String>) -> Self {
        match self {
            already @ Self::InFile { .. } => already,
            other => Self::InFile {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }

    /// The innermost error, skipping file annotations
    pub fn root(&self) -> &FuelcfgError {
        match self {
            Self::InFile { source, .. } => source.root(),
            other => other,
        }
    }

    /// Name of the configuration field this error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self.root() {
            Self::MissingField { field, .. }
            | Self::InvalidType { field, .. }
            | Self::PathResolution { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self.root() {
            Self::MissingField { field, .. } if field == "contracts" => {
                Some("Add at least one contract directory, e.g. contracts = [\"../contract\"]")
            },
            Self::MissingField { .. } => Some("Provide a non-empty value or remove the field"),
            Self::InvalidType { .. } => {
                Some("Path lists must be arrays of strings and 'output' must be a string")
            },
            Self::PathResolution { .. } => {
                Some("Use a path relative to the config file's directory or an absolute path")
            },
            Self::ConfigNotFound { .. } => {
                Some("Run 'fuelcfg init' to create one, or pass --config <PATH>")
            },
            Self::AlreadyExists { .. } => Some("Pass --force to overwrite the existing file"),
            Self::UnsupportedFormat { .. } => {
                Some("Rename the file to fuels.config.toml or fuels.config.json")
            },
            _ => None,
        }
    }
}
