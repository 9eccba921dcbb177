//! Utility functions and helpers.
//!
//! Common functionality used across multiple fuelcfg crates.

pub mod path;

// Re-export commonly used utilities
pub use path::{base_dir_of, normalize_path, resolve_path};
